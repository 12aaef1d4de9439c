use std::sync::Arc;

use services::{ClueSource, Clock};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn clue_source(&self) -> Arc<dyn ClueSource>;
    /// Shown on the home page so players know where clues come from.
    fn clue_origin(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    clue_source: Arc<dyn ClueSource>,
    clue_origin: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            clue_source: app.clue_source(),
            clue_origin: app.clue_origin(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Shared for the whole app; one fetch per started game.
    #[must_use]
    pub fn clue_source(&self) -> Arc<dyn ClueSource> {
        Arc::clone(&self.clue_source)
    }

    #[must_use]
    pub fn clue_origin(&self) -> &str {
        &self.clue_origin
    }
}

// This context is provided by the application composition root (`crates/app`).

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
