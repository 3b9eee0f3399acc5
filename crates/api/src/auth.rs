// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inbound authentication.
//!
//! Authentication is carried in-band: the channel manager puts its API key
//! in the WS-Security `Password` element of the SOAP header. The key is
//! exchanged for an opaque access token via the credential store. Nothing
//! here raises — every failure mode collapses to "no key" or "no token",
//! and the caller renders the matching authentication error.

use res_notif::CredentialStore;
use res_notif_wire::{XmlValue, extract_password, parse_document};
use tracing::{debug, error};

/// Outcome of an authentication-only connection probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionProbe {
    /// The SOAP header carried no usable password element.
    MissingKey,
    /// The key did not validate against the credential store.
    InvalidKey,
    /// The key validated and a token exists for its login.
    Authenticated,
}

/// Service wrapping key extraction and token exchange.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Extracts the API key from the parsed SOAP header.
    ///
    /// Returns `None` if the document failed to parse upstream or the
    /// password element is absent or empty.
    #[must_use]
    pub fn extract_api_key(doc: &XmlValue) -> Option<String> {
        extract_password(doc)
    }

    /// Exchanges an API key for an opaque access token.
    ///
    /// Any failure — unknown key, store error on validation or minting —
    /// yields `None`, never an error. Store failures are logged before
    /// being swallowed.
    pub fn get_token<C: CredentialStore + ?Sized>(
        credentials: &mut C,
        api_key: &str,
    ) -> Option<String> {
        let login: String = match credentials.validate_api_key(api_key) {
            Ok(Some(login)) => login,
            Ok(None) => {
                debug!("API key did not match any registered credential");
                return None;
            }
            Err(err) => {
                error!(error = %err, "credential store failed during key validation");
                return None;
            }
        };

        match credentials.find_or_create_token(&login) {
            Ok(token) => Some(token),
            Err(err) => {
                error!(login = %login, error = %err, "credential store failed to mint token");
                None
            }
        }
    }

    /// Runs the authentication steps alone against a raw SOAP body.
    ///
    /// Backs the connection-test endpoint: channel managers send a probe
    /// request during onboarding to verify their credentials before any
    /// reservation traffic flows.
    pub fn probe_connection<C: CredentialStore + ?Sized>(
        credentials: &mut C,
        body: &str,
    ) -> ConnectionProbe {
        let doc: XmlValue = parse_document(body);
        let Some(api_key) = Self::extract_api_key(&doc) else {
            return ConnectionProbe::MissingKey;
        };
        if Self::get_token(credentials, &api_key).is_some() {
            ConnectionProbe::Authenticated
        } else {
            ConnectionProbe::InvalidKey
        }
    }
}
