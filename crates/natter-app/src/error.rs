//! Runtime error types.

use thiserror::Error;

/// Failure surfaced by the runtime's event loop.
///
/// Generic over the collaborators' error types; the runtime logs the
/// failure and returns it to the caller without retrying.
#[derive(Debug, Error)]
pub enum RuntimeError<B, R, V>
where
    B: std::error::Error + 'static,
    R: std::error::Error + 'static,
    V: std::error::Error + 'static,
{
    /// The event bus failed to connect or emit.
    #[error("event bus failure")]
    Bus(#[source] B),

    /// A request/response call failed.
    #[error("request channel failure")]
    Remote(#[source] R),

    /// The view failed to render.
    #[error("render failure")]
    View(#[source] V),
}
