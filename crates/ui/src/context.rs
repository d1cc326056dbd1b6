use std::future::Future;
use std::sync::Arc;

use dioxus::prelude::*;
use services::ProgressService;

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Shell state shared by every page: the loading overlay, the alert modal and
/// a revision counter bumped whenever the learning session may have changed.
#[derive(Clone, Copy, PartialEq)]
pub struct UiState {
    pub busy: Signal<bool>,
    pub alert: Signal<Option<String>>,
    pub revision: Signal<u64>,
}

impl UiState {
    /// Subscribe the calling component to session changes.
    pub fn track(self) {
        let _ = (self.revision)();
    }

    pub fn session_changed(mut self) {
        self.revision.with_mut(|revision| *revision += 1);
    }

    pub fn show_alert(mut self, message: impl Into<String>) {
        self.alert.set(Some(message.into()));
    }

    pub fn dismiss_alert(mut self) {
        self.alert.set(None);
    }

    /// Run `task` with the loading overlay up, then refresh session readers.
    pub fn run<F>(mut self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if *self.busy.peek() {
            return;
        }
        self.busy.set(true);
        spawn(async move {
            task.await;
            self.busy.set(false);
            self.session_changed();
        });
    }
}

/// Create the shell state in the calling component and provide it to descendants.
pub fn use_ui_state_provider() -> UiState {
    let busy = use_signal(|| false);
    let alert = use_signal(|| None::<String>);
    let revision = use_signal(|| 0_u64);
    use_context_provider(|| UiState {
        busy,
        alert,
        revision,
    })
}
