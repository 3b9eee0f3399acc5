// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine-to-wire error translation.

use res_notif::EngineError;
use res_notif_wire::ErrorKind;

/// Translates an engine error into its wire error kind and message.
///
/// This translation is explicit and exhaustive: it is the only place where
/// the engine's closed error set meets the OTA error taxonomy, and a new
/// engine variant will not compile until it is given a kind here. Store
/// failures are the one class rehomed as `system_error` — the channel has
/// no use for backend detail.
#[must_use]
pub fn translate_engine_error(err: &EngineError) -> (ErrorKind, String) {
    let kind: ErrorKind = match err {
        EngineError::Validation(_) => ErrorKind::Validation,
        EngineError::Capacity { .. } => ErrorKind::Capacity,
        EngineError::Availability(_) => ErrorKind::Availability,
        EngineError::State(_) => ErrorKind::State,
        EngineError::Confirmation(_) => ErrorKind::Confirmation,
        EngineError::Cleanup(_) => ErrorKind::Cleanup,
        EngineError::NotFound { .. } => ErrorKind::NotFound,
        EngineError::Store(_) => ErrorKind::System,
    };
    (kind, err.to_string())
}
