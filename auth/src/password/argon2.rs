use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing with Argon2id.
///
/// Verification is constant-time with respect to the password (delegated to
/// the argon2 crate's verifier).
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the library's default cost parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - memory cost in KiB
    /// * `iterations` - time cost
    /// * `parallelism` - lane count
    ///
    /// # Errors
    /// * `InvalidCost` - the parameters are outside Argon2's accepted ranges
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC-format hash.
    ///
    /// # Errors
    /// * `VerificationFailed` - the stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash).expect("verify failed"));
        assert!(!hasher.verify("wrong_password", &hash).expect("verify failed"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").expect("hash failed");
        let second = hasher.hash("same_password").expect("hash failed");

        assert_ne!(first, second);
    }

    #[test]
    fn test_with_cost_produces_verifiable_hash() {
        let hasher = PasswordHasher::with_cost(8192, 2, 1).expect("valid params rejected");

        let hash = hasher.hash("password").expect("hash failed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("password", &hash).expect("verify failed"));
    }

    #[test]
    fn test_with_cost_rejects_invalid_params() {
        let result = PasswordHasher::with_cost(0, 0, 0);
        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(result.is_err());
    }
}
