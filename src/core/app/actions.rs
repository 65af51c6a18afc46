use tokio::sync::mpsc;
use tracing::debug;

use super::App;
use crate::core::message::{Message, Participant};
use crate::ui::renderer::message_viewport_height;

#[derive(Debug)]
pub enum AppAction {
    SubmitMessage { message: String },
    DeliverReply { text: String },
    InsertIntoInput { text: String },
    ClearInput,
    ScrollUp { lines: u16 },
    ScrollDown { lines: u16 },
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    RequestExit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction, ctx: AppActionContext) {
        self.dispatch_many([action], ctx);
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

/// Side effects requested by an action that the event loop has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    ScheduleReply,
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    match action {
        AppAction::SubmitMessage { message } => submit(app, message),
        AppAction::DeliverReply { text } => {
            deliver_reply(app, text);
            None
        }
        AppAction::InsertIntoInput { text } => {
            app.ui.insert_into_input(&text);
            None
        }
        AppAction::ClearInput => {
            app.ui.clear_input();
            None
        }
        AppAction::ScrollUp { lines } => {
            app.ui.scroll.scroll_up(lines);
            None
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll.scroll_down(lines);
            None
        }
        AppAction::PageUp => {
            app.ui.scroll.scroll_up(page_size(ctx));
            None
        }
        AppAction::PageDown => {
            app.ui.scroll.scroll_down(page_size(ctx));
            None
        }
        AppAction::ScrollToTop => {
            app.ui.scroll.scroll_to_top();
            None
        }
        AppAction::ScrollToBottom => {
            app.ui.scroll.scroll_to_bottom();
            None
        }
        AppAction::RequestExit => {
            app.ui.exit_requested = true;
            None
        }
    }
}

/// Append the primary participant's message and ask for a delayed reply.
///
/// Blank or whitespace-only text is dropped without touching the store or
/// the input field.
pub fn submit(app: &mut App, text: String) -> Option<AppCommand> {
    if text.trim().is_empty() {
        return None;
    }

    let message = Message::stamped(Participant::Primary, text, &app.session.timestamp_format);
    app.store.append(message);
    app.ui.clear_input();
    debug!(messages = app.store.len(), "primary message appended");
    Some(AppCommand::ScheduleReply)
}

pub fn deliver_reply(app: &mut App, text: String) {
    let message = Message::stamped(Participant::Secondary, text, &app.session.timestamp_format);
    app.store.append(message);
    debug!(messages = app.store.len(), "secondary reply appended");
}

fn page_size(ctx: AppActionContext) -> u16 {
    message_viewport_height(ctx.term_height).saturating_sub(1).max(1)
}
