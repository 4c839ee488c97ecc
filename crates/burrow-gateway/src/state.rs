use std::sync::Arc;

use burrow_core::{Shortener, WorkerContext};
use burrow_redirector::Redirector;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    public_base_url: Option<String>,
    context: WorkerContext,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        context: WorkerContext,
    ) -> Self {
        Self {
            shortener,
            redirector,
            public_base_url: None,
            context,
        }
    }

    /// Renders short links under `public_base_url` instead of the request's `Host`.
    pub fn with_public_base_url(mut self, public_base_url: impl Into<String>) -> Self {
        self.public_base_url = Some(public_base_url.into());
        self
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }

    pub fn context(&self) -> WorkerContext {
        self.context
    }
}
