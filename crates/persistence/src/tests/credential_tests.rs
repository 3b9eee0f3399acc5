// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use res_notif::CredentialStore;

#[test]
fn registered_key_validates_and_unknown_key_does_not() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .register_api_key("siteminder", "secret-key-1")
        .unwrap();

    assert_eq!(
        persistence.validate_api_key("secret-key-1").unwrap().as_deref(),
        Some("siteminder")
    );
    assert!(persistence.validate_api_key("wrong-key").unwrap().is_none());
    assert!(persistence.validate_api_key("").unwrap().is_none());
}

#[test]
fn key_rotation_invalidates_the_old_key() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .register_api_key("siteminder", "old-key")
        .unwrap();
    persistence
        .register_api_key("siteminder", "new-key")
        .unwrap();

    assert!(persistence.validate_api_key("old-key").unwrap().is_none());
    assert_eq!(
        persistence.validate_api_key("new-key").unwrap().as_deref(),
        Some("siteminder")
    );
}

#[test]
fn tokens_are_minted_once_and_reused() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let first: String = persistence.find_or_create_token("siteminder").unwrap();
    let second: String = persistence.find_or_create_token("siteminder").unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    let other: String = persistence.find_or_create_token("expedia").unwrap();
    assert_ne!(first, other);
}
