//! Application state and the action layer that mutates it.
//!
//! [`App`] bundles the [`ChatStore`] with presentation state and session
//! settings. All changes go through [`apply_action`], which the event loop
//! calls while holding the [`AppHandle`] lock.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::message::Participant;
use crate::core::store::ChatStore;
use crate::ui::theme::Theme;

pub mod actions;
pub mod session;
pub mod ui_state;


pub use actions::{
    apply_action, apply_actions, submit, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
pub use session::SessionContext;
pub use ui_state::UiState;

pub struct App {
    pub store: ChatStore,
    pub ui: UiState,
    pub session: SessionContext,
}

impl App {
    pub fn new(session: SessionContext, theme: Theme, theme_id: Option<String>) -> Self {
        Self::with_store(ChatStore::new(), session, theme, theme_id)
    }

    /// Build an app around an existing store.
    pub fn with_store(
        store: ChatStore,
        session: SessionContext,
        theme: Theme,
        theme_id: Option<String>,
    ) -> Self {
        Self {
            store,
            ui: UiState::new(theme, theme_id),
            session,
        }
    }

    pub fn display_name(&self, participant: Participant) -> &str {
        self.session.display_name(participant)
    }

    #[cfg(test)]
    pub fn new_test_app() -> Self {
        Self::new(SessionContext::default(), Theme::default_theme(), None)
    }
}

/// Shared, lockable handle to the [`App`] used by the event loop and
/// background tasks.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<Mutex<App>>,
}

impl AppHandle {
    pub fn new(app: App) -> Self {
        Self {
            inner: Arc::new(Mutex::new(app)),
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
