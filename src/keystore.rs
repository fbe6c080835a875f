//! Explicit per-user key storage
//!
//! Front-ends that juggle several participants need somewhere to keep each
//! one's curve and key pair. That state lives here as an owned value the
//! caller passes around by reference — the core never holds it as a global.

use std::collections::BTreeMap;

use crate::curve::Curve;
use crate::ecdsa::KeyPair;

/// One user's key material: the curve it was generated on and the pair
#[derive(Clone, Debug)]
pub struct UserKeys {
    /// Curve the key pair belongs to
    pub curve: Curve,
    /// The key pair itself
    pub keypair: KeyPair,
}

/// A keyed store mapping user names to their key material
#[derive(Clone, Debug, Default)]
pub struct KeyStore {
    users: BTreeMap<String, UserKeys>,
}

impl KeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's key material, returning what it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        curve: Curve,
        keypair: KeyPair,
    ) -> Option<UserKeys> {
        self.users.insert(name.into(), UserKeys { curve, keypair })
    }

    /// Look up a user's key material
    pub fn get(&self, name: &str) -> Option<&UserKeys> {
        self.users.get(name)
    }

    /// Remove a user, returning their key material
    pub fn remove(&mut self, name: &str) -> Option<UserKeys> {
        self.users.remove(name)
    }

    /// Registered user names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;
    use crate::ecdsa::KeyPair;
    use crate::params;

    fn sample_keys(d: u32) -> (Curve, KeyPair) {
        let curve = params::demo_p97();
        let keypair = KeyPair::from_private(&curve, BigUint::from(d)).unwrap();
        (curve, keypair)
    }

    #[test]
    fn insert_get_remove() {
        let mut store = KeyStore::new();
        assert!(store.is_empty());

        let (curve, keypair) = sample_keys(2);
        assert!(store.insert("alice", curve, keypair).is_none());
        assert_eq!(store.len(), 1);

        let entry = store.get("alice").expect("alice was inserted");
        assert_eq!(
            entry.keypair.private_scalar(),
            &BigUint::from(2u32)
        );
        assert!(store.get("bob").is_none());

        assert!(store.remove("alice").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut store = KeyStore::new();
        let (curve, keypair) = sample_keys(2);
        store.insert("alice", curve, keypair);

        let (curve, keypair) = sample_keys(3);
        let previous = store.insert("alice", curve, keypair).unwrap();
        assert_eq!(previous.keypair.private_scalar(), &BigUint::from(2u32));
        assert_eq!(
            store.get("alice").unwrap().keypair.private_scalar(),
            &BigUint::from(3u32)
        );
    }

    #[test]
    fn names_are_sorted() {
        let mut store = KeyStore::new();
        for name in ["carol", "alice", "bob"] {
            let (curve, keypair) = sample_keys(2);
            store.insert(name, curve, keypair);
        }
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }
}
