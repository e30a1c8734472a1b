/**
 * Password Hashing
 *
 * bcrypt hashing and verification for stored credentials. Every digest embeds
 * its own random salt and work factor, so two hashes of the same password
 * differ and old digests keep verifying after the configured cost changes.
 */

use crate::backend::error::BackendResult;

/// bcrypt hasher with a fixed work factor for new digests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher producing digests with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor used for new digests
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    ///
    /// # Errors
    ///
    /// Returns `BackendError::PasswordHash` if bcrypt rejects the cost.
    pub fn hash(&self, plaintext: &str) -> BackendResult<String> {
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A malformed digest is a non-match, not an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!("Stored password digest could not be parsed: {}", e);
                false
            }
        }
    }
}
