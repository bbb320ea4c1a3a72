use crate::types::{AppError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Password hashing service using Argon2id with a configurable work factor.
///
/// Hashes carry their salt and parameters in the PHC string, so verification
/// works across work-factor changes; raising the work factor only affects
/// newly stored hashes.
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Creates a password service with the given Argon2 work factor.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes over memory
    /// * `parallelism` - Number of lanes
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::Internal(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// Returns a PHC-formatted hash string.
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against a stored PHC hash string.
    ///
    /// The salt and parameters embedded in the hash drive the
    /// recomputation; the comparison itself is the argon2 crate's
    /// constant-time check.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> PasswordService {
        // Minimal legal work factor keeps the suite fast; production values
        // come from configuration.
        PasswordService::new(8, 1, 1).expect("valid Argon2 parameters")
    }

    #[test]
    fn test_password_hashing() {
        let service = create_test_service();
        let password = "test_password_123";

        let hash = service.hash(password).expect("should hash password");

        // Hash should not equal the original password
        assert_ne!(hash, password);

        // Hash should be in PHC format (starts with $argon2)
        assert!(hash.starts_with("$argon2"), "hash should be in PHC format");
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = create_test_service();
        let password = "same_password";

        let first = service.hash(password).expect("should hash password");
        let second = service.hash(password).expect("should hash password");

        assert_ne!(first, second, "same password should hash differently");
    }

    #[test]
    fn test_password_verification_success() {
        let service = create_test_service();
        let password = "secure_password_456";

        let hash = service.hash(password).expect("should hash password");
        let is_valid = service.verify(password, &hash).expect("should verify");

        assert!(is_valid, "correct password should verify successfully");
    }

    #[test]
    fn test_password_verification_failure() {
        let service = create_test_service();
        let password = "correct_password";
        let wrong_password = "wrong_password";

        let hash = service.hash(password).expect("should hash password");
        let is_valid = service
            .verify(wrong_password, &hash)
            .expect("should verify");

        assert!(!is_valid, "wrong password should fail verification");
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let service = create_test_service();

        let result = service.verify("password", "not-a-phc-string");

        assert!(result.is_err(), "malformed hash should be an error");
    }
}
