//! File token generation.
//!
//! Tokens are the only external reference to a stored file. Generation is
//! behind a trait so services can inject a deterministic generator in tests.

use uuid::Uuid;

/// Generates opaque, unique file tokens.
///
/// Implementations must return a fresh value on every call; token uniqueness
/// across uploads rests entirely on this contract.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by UUIDv4.
#[derive(Debug, Clone, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
