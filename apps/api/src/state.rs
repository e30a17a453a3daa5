use std::sync::Arc;

use crate::config::Config;
use crate::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only at request time: the recipient table is compiled in and the
/// mailer is built once at startup. `mailer` is `None` when SMTP credentials
/// are absent — each submission then fails as a configuration fault.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Option<Arc<dyn Mailer>>,
}
