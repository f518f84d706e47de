//! One-time shape-kind registration.
//!
//! Hosting code registers each shape kind it wires into its object model;
//! a duplicate registration is a no-op that warns, mirroring the
//! duplicate-definition guard a dynamic module system would perform at
//! load time. Shape types themselves never consult this.

use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

fn registered() -> &'static Mutex<BTreeSet<&'static str>> {
    static REGISTERED: OnceLock<Mutex<BTreeSet<&'static str>>> = OnceLock::new();
    REGISTERED.get_or_init(|| Mutex::new(BTreeSet::new()))
}

/// Register a shape kind. Returns `false` (and warns) when the kind was
/// already registered.
pub fn register(kind: &'static str) -> bool {
    let mut kinds = match registered().lock() {
        Ok(kinds) => kinds,
        Err(poisoned) => poisoned.into_inner(),
    };
    let fresh = kinds.insert(kind);
    if !fresh {
        crate::log::warn!("shape kind {:?} is already registered", kind);
    }
    fresh
}

/// Whether a shape kind has been registered.
pub fn is_registered(kind: &str) -> bool {
    let kinds = match registered().lock() {
        Ok(kinds) => kinds,
        Err(poisoned) => poisoned.into_inner(),
    };
    kinds.contains(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_flagged() {
        assert!(register("registry-test-line"));
        assert!(is_registered("registry-test-line"));
        assert!(!register("registry-test-line"));
    }

    #[test]
    fn unknown_kind_is_not_registered() {
        assert!(!is_registered("registry-test-unknown"));
    }
}
