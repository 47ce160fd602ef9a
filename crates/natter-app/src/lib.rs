//! Application layer
//!
//! Binds the sans-IO [`natter_client::SyncEngine`] to real collaborators:
//! an [`EventBus`] for server broadcasts, a [`RemoteChannel`] for fetches
//! and authoritative mutations, and a [`View`] for rendering.
//!
//! # Architecture
//!
//! The [`Runtime`] owns the engine on a single task and drives one loop:
//! take a [`UserIntent`] or a broadcast, feed it to the engine, execute the
//! resulting actions, and await fetch completions inline so every store
//! mutation happens on that task.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod intent;
mod runtime;

pub use driver::{EventBus, RemoteChannel, View};
pub use error::RuntimeError;
pub use intent::UserIntent;
pub use runtime::Runtime;
