// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential queries.

use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::{access_tokens, api_keys};
use crate::error::PersistenceError;

/// Validates an opaque API key against the stored bcrypt hashes.
///
/// Keys are salted, so there is no hash column to index on — every stored
/// key is verified in turn, the same scheme the upstream credential store
/// uses. Returns the owning login name on the first match.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn validate_api_key(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    let rows: Vec<(String, String)> = api_keys::table
        .select((api_keys::login_name, api_keys::key_hash))
        .load(conn)?;

    for (login_name, key_hash) in rows {
        if bcrypt::verify(key, &key_hash).unwrap_or(false) {
            debug!(login_name = %login_name, "API key validated");
            return Ok(Some(login_name));
        }
    }
    Ok(None)
}

/// Looks up the existing access token for a login, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn token_for_login(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<String>, PersistenceError> {
    let token: Option<String> = access_tokens::table
        .filter(access_tokens::login_name.eq(login_name))
        .select(access_tokens::token)
        .first(conn)
        .optional()?;
    Ok(token)
}
