use std::sync::Arc;

/// UI-facing capabilities supplied by the composition root.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;

    /// Whether the time-limit checkbox starts checked.
    fn limit_checked_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    limit_checked_on_launch: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            limit_checked_on_launch: app.limit_checked_on_launch(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn limit_checked_on_launch(&self) -> bool {
        self.limit_checked_on_launch
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
