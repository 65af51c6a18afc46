//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal input arrives on a channel fed by a blocking reader task. Key
//! presses become [`AppAction`]s, the queued actions are applied against the
//! shared [`App`](crate::core::app::App), and the frame is redrawn when
//! something changed. Scheduled replies come back through the same action
//! queue, so every mutation of the store happens on this loop.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::Size;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tui_textarea::Input as TAInput;

use crate::core::app::{
    apply_actions, submit, App, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand, AppHandle,
};
use crate::core::reply_scheduler::ReplyScheduler;
use crate::ui::renderer::ui;

use super::keybindings::{resolve_key, sanitize_pasted_text, KeyResult};
use super::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};

const MAX_FPS: u64 = 60;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

async fn is_exit_requested(app: &AppHandle) -> bool {
    app.read(|app| app.ui.exit_requested).await
}

async fn current_terminal_size(terminal: &SharedTerminal) -> Size {
    let terminal_guard = terminal.lock().await;
    terminal_guard.size().unwrap_or_default()
}

async fn try_draw_frame(
    app: &AppHandle,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let mut terminal_guard = terminal.lock().await;
    app.update(|app| terminal_guard.draw(|f| ui(f, app)))
        .await?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

fn action_context(term_size: Size) -> AppActionContext {
    AppActionContext {
        term_width: term_size.width,
        term_height: term_size.height,
    }
}

#[derive(Debug, Default)]
struct EventProcessingOutcome {
    events_processed: bool,
    request_redraw: bool,
    exit_requested: bool,
    commands: Vec<AppCommand>,
}

async fn process_ui_events(
    app: &AppHandle,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
    term_size: Size,
) -> EventProcessingOutcome {
    let mut outcome = EventProcessingOutcome::default();

    while let Ok(ev) = event_rx.try_recv() {
        outcome.events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if route_keyboard_event(app, dispatcher, key, term_size, &mut outcome.commands)
                    .await
                {
                    outcome.exit_requested = true;
                    break;
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                handle_paste_event(dispatcher, term_size, &text);
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    if outcome.events_processed {
        outcome.request_redraw = true;
    }
    outcome
}

/// Returns `true` when the key asks to leave the chat.
async fn route_keyboard_event(
    app: &AppHandle,
    dispatcher: &AppActionDispatcher,
    key: KeyEvent,
    term_size: Size,
    commands: &mut Vec<AppCommand>,
) -> bool {
    let ctx = action_context(term_size);
    match resolve_key(&key) {
        KeyResult::Submit => {
            // Read, append and clear under one lock so the keys that follow
            // in this batch edit an empty input.
            let command = app
                .update(|app| {
                    let message = app.ui.get_input_text().to_string();
                    submit(app, message)
                })
                .await;
            commands.extend(command);
            false
        }
        KeyResult::Action(action) => {
            let exit = matches!(action, AppAction::RequestExit);
            dispatcher.dispatch(action, ctx);
            exit
        }
        KeyResult::Edit => {
            app.update(|app| {
                app.ui.apply_textarea_edit(|ta| {
                    ta.input(TAInput::from(key));
                });
            })
            .await;
            false
        }
    }
}

fn handle_paste_event(dispatcher: &AppActionDispatcher, term_size: Size, text: &str) {
    let sanitized_text = sanitize_pasted_text(text);
    if sanitized_text.is_empty() {
        return;
    }
    dispatcher.dispatch(
        AppAction::InsertIntoInput {
            text: sanitized_text,
        },
        action_context(term_size),
    );
}

/// Apply every queued action and carry out the commands they return.
/// Returns `true` when at least one action was applied.
async fn drain_action_queue(
    app: &AppHandle,
    dispatcher: &AppActionDispatcher,
    scheduler: &ReplyScheduler,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }

    if pending.is_empty() {
        return false;
    }

    let (commands, term_size) = app
        .update(|app| (apply_actions(app, pending), app.ui.last_term_size))
        .await;
    run_commands(scheduler, dispatcher, commands, term_size);
    true
}

fn run_commands(
    scheduler: &ReplyScheduler,
    dispatcher: &AppActionDispatcher,
    commands: impl IntoIterator<Item = AppCommand>,
    term_size: Size,
) {
    for cmd in commands {
        match cmd {
            AppCommand::ScheduleReply => {
                scheduler.schedule(dispatcher.clone(), action_context(term_size));
            }
        }
    }
}

/// How long an idle pass should sleep. A redraw that is waiting on the frame
/// cap only needs the rest of the current frame.
fn idle_wait(
    request_redraw: bool,
    since_last_draw: Duration,
    frame_duration: Duration,
) -> Duration {
    if request_redraw {
        frame_duration
            .saturating_sub(since_last_draw)
            .max(Duration::from_millis(1))
    } else {
        frame_duration
    }
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

async fn main_loop(
    app: &AppHandle,
    terminal: &SharedTerminal,
    scheduler: &ReplyScheduler,
    dispatcher: &AppActionDispatcher,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> Result<(), Box<dyn Error>> {
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;
    let mut last_term_size = Size::default();

    loop {
        if is_exit_requested(app).await {
            return Ok(());
        }

        try_draw_frame(
            app,
            terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await?;

        let term_size = current_terminal_size(terminal).await;
        if term_size != last_term_size {
            last_term_size = term_size;
            request_redraw = true;
            app.update(|app| {
                app.ui.last_term_size = term_size;
            })
            .await;
        }

        let event_outcome = process_ui_events(app, event_rx, dispatcher, term_size).await;
        if event_outcome.exit_requested {
            return Ok(());
        }
        if event_outcome.request_redraw {
            request_redraw = true;
        }
        run_commands(scheduler, dispatcher, event_outcome.commands, term_size);

        let actions_applied = drain_action_queue(app, dispatcher, scheduler, action_rx).await;
        if actions_applied {
            request_redraw = true;
        }

        if !event_outcome.events_processed && !actions_applied {
            let wait = idle_wait(request_redraw, last_draw.elapsed(), frame_duration);
            tokio::time::sleep(wait).await;
        }
    }
}

/// Run the chat screen until the user exits.
///
/// Pending replies are cancelled before the terminal is restored, so none of
/// them reaches the store after the screen is gone.
pub async fn run_chat(app: App, scheduler: ReplyScheduler) -> Result<(), Box<dyn Error>> {
    let app = AppHandle::new(app);
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let dispatcher = AppActionDispatcher::new(action_tx);

    let terminal = setup_terminal()?;
    info!(
        reply_delay_ms = scheduler.delay().as_millis() as u64,
        "chat started"
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = main_loop(
        &app,
        &terminal,
        &scheduler,
        &dispatcher,
        &mut event_rx,
        &mut action_rx,
    )
    .await;

    event_reader_handle.abort();
    scheduler.shutdown();
    restore_terminal(&terminal).await?;

    let messages = app.read(|app| app.store.len()).await;
    info!(messages, "chat closed");
    if let Err(err) = &result {
        debug!(error = %err, "chat loop ended with an error");
    }
    result
}
