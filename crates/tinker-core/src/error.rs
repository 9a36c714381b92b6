// ── Routing error types ──
//
// `NotFound` is the only error resolution can produce; the view layer
// decides what to render for it. The rest come from building tables and
// reverse-routing.

use thiserror::Error;

use crate::view::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches path '{path}'")]
    NotFound { path: String },

    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("no route renders view {view}")]
    UnknownView { view: ViewId },

    #[error("missing parameter '{name}' for route '{pattern}'")]
    MissingParam { name: String, pattern: String },

    #[error("parameter '{name}' has unusable value {value:?}")]
    InvalidParam { name: String, value: String },
}

impl RouteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
