// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer.
//!
//! Orchestrates the notification pipeline — authenticate, parse, extract,
//! reconcile, respond — over the engine's store traits, and owns the
//! translation from engine errors to wire error kinds. Every request that
//! reaches this layer produces a well-formed XML body; nothing escapes as a
//! transport failure.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handler;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, ConnectionProbe};
pub use error::translate_engine_error;
pub use handler::process_notification;
