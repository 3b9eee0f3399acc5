// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential mutations.

use diesel::prelude::*;
use rand::RngExt;
use tracing::info;

use crate::diesel_schema::{access_tokens, api_keys};
use crate::error::PersistenceError;
use crate::queries::credentials::token_for_login;
use crate::sqlite::now_timestamp;

/// Registers (or rotates) an inbound API key for a login.
///
/// The key itself is never stored; only its bcrypt hash is.
///
/// # Errors
///
/// Returns an error if hashing or the write fails.
pub fn register_api_key(
    conn: &mut SqliteConnection,
    login_name: &str,
    key: &str,
) -> Result<(), PersistenceError> {
    let key_hash: String = bcrypt::hash(key, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::InitializationError(format!("bcrypt failure: {e}")))?;

    let updated: usize = diesel::update(api_keys::table.filter(api_keys::login_name.eq(login_name)))
        .set(api_keys::key_hash.eq(&key_hash))
        .execute(conn)?;
    if updated == 0 {
        diesel::insert_into(api_keys::table)
            .values((
                api_keys::login_name.eq(login_name),
                api_keys::key_hash.eq(&key_hash),
                api_keys::created_at.eq(now_timestamp()),
            ))
            .execute(conn)?;
    }

    info!(login_name = %login_name, "registered inbound API key");
    Ok(())
}

/// Mints or retrieves the opaque access token for a login.
///
/// # Errors
///
/// Returns an error if the query or insert fails.
pub fn find_or_create_token(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<String, PersistenceError> {
    if let Some(token) = token_for_login(conn, login_name)? {
        return Ok(token);
    }

    let value: u128 = rand::rng().random();
    let token: String = format!("{value:032x}");
    diesel::insert_into(access_tokens::table)
        .values((
            access_tokens::login_name.eq(login_name),
            access_tokens::token.eq(&token),
            access_tokens::created_at.eq(now_timestamp()),
        ))
        .execute(conn)?;
    Ok(token)
}
