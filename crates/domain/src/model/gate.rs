//! AccessGate - a two-state lock behind a credential check
//!
//! Models a door intercom. Exactly two states, {Locked, Unlocked}:
//! `unlock` with the valid code is the only Locked→Unlocked transition, and
//! `lock` is the only way back (a no-op when already locked).
//!
//! The valid code is injected at construction (usually from
//! `shared::GateConfig`) rather than baked into the check.

use shared::{ModelError, Result};

/// AccessGate - binary lock state for one apartment
#[derive(Debug, Clone)]
pub struct AccessGate {
    /// Apartment number (immutable identity)
    apartment: u32,
    /// Current lock state
    locked: bool,
    /// Code accepted as a valid credential
    access_code: String,
}

impl AccessGate {
    /// Create a gate for an apartment, initially locked.
    ///
    /// Fails with `InvalidArgument` if the apartment number is zero or the
    /// access code is empty.
    pub fn new(apartment: u32, access_code: impl Into<String>) -> Result<Self> {
        let access_code = access_code.into();
        if apartment == 0 {
            return Err(ModelError::InvalidArgument(
                "apartment number must be positive".to_string(),
            ));
        }
        if access_code.is_empty() {
            return Err(ModelError::InvalidArgument(
                "access code must not be empty".to_string(),
            ));
        }

        Ok(Self {
            apartment,
            locked: true,
            access_code,
        })
    }

    /// Builder: start in the unlocked state instead
    pub fn unlocked(mut self) -> Self {
        self.locked = false;
        self
    }

    // ========== Getters ==========

    pub fn apartment(&self) -> u32 {
        self.apartment
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    // ========== State Transitions ==========

    /// Try to unlock with a credential.
    ///
    /// Returns `true` and transitions to unlocked on a match; otherwise the
    /// state is unchanged and `false` is returned.
    pub fn unlock(&mut self, code: &str) -> bool {
        if code == self.access_code {
            self.locked = false;
            true
        } else {
            false
        }
    }

    /// Lock the gate. No effect if already locked.
    pub fn lock(&mut self) {
        self.locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_locked() {
        let intercom = AccessGate::new(101, "1234").unwrap();
        assert_eq!(intercom.apartment(), 101);
        assert!(intercom.is_locked());
    }

    #[test]
    fn test_unlocked_builder() {
        let intercom = AccessGate::new(101, "1234").unwrap().unlocked();
        assert!(!intercom.is_locked());
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(AccessGate::new(0, "1234").is_err());
        assert!(AccessGate::new(101, "").is_err());
    }

    #[test]
    fn test_unlock_with_valid_code() {
        let mut intercom = AccessGate::new(101, "1234").unwrap();
        assert!(intercom.unlock("1234"));
        assert!(!intercom.is_locked());
    }

    #[test]
    fn test_unlock_with_wrong_code() {
        let mut intercom = AccessGate::new(101, "1234").unwrap();
        assert!(!intercom.unlock("0000"));
        assert!(intercom.is_locked());

        // A failed attempt does not relock an open gate either
        intercom.unlock("1234");
        assert!(!intercom.unlock("0000"));
        assert!(!intercom.is_locked());
    }

    #[test]
    fn test_lock_is_idempotent() {
        let mut intercom = AccessGate::new(101, "1234").unwrap();
        intercom.lock();
        assert!(intercom.is_locked());

        intercom.unlock("1234");
        intercom.lock();
        assert!(intercom.is_locked());
    }
}
