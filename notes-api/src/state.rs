//! Shared, read-only state handed to every handler.

use lecture_notes::NotesLimits;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::auth::AuthState;
use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub limits: NotesLimits,
    pub auth: AuthState,
    /// Render handle for `/metrics`; `None` when no recorder is installed.
    pub metrics: Option<PrometheusHandle>
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            limits: config.limits.notes_limits(),
            auth: AuthState::from_config(&config.auth),
            config,
            metrics: None
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
