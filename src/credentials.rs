//! Secure credential types with automatic memory zeroization.
//!
//! API keys are wrapped in [`SecretString`], which overwrites its memory with
//! zeros on drop and redacts its `Debug`/`Display` output so secrets never
//! leak into logs.

use crate::error::{Error, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the Upbit access key.
pub const ACCESS_KEY_ENV: &str = "UPBIT_ACCESS_KEY";

/// Environment variable holding the Upbit secret key.
pub const SECRET_KEY_ENV: &str = "UPBIT_SECRET_KEY";

/// A string that is zeroed on drop and redacted when printed.
///
/// Use [`expose_secret`](SecretString::expose_secret) to access the value;
/// avoid holding the returned reference longer than necessary.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns the secret as bytes.
    #[inline]
    pub fn expose_secret_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns `true` if the secret is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An access/secret key pair, immutable for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_key: SecretString,
    secret_key: SecretString,
}

impl Credentials {
    /// Creates a credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if either key is empty.
    pub fn new(
        access_key: impl Into<SecretString>,
        secret_key: impl Into<SecretString>,
    ) -> Result<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        if access_key.is_empty() {
            return Err(Error::authentication("access key must not be empty"));
        }
        if secret_key.is_empty() {
            return Err(Error::authentication("secret key must not be empty"));
        }
        Ok(Self {
            access_key,
            secret_key,
        })
    }

    /// Loads credentials from `UPBIT_ACCESS_KEY` / `UPBIT_SECRET_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .map_err(|_| Error::authentication(format!("{ACCESS_KEY_ENV} is not set")))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| Error::authentication(format!("{SECRET_KEY_ENV} is not set")))?;
        Self::new(access_key, secret_key)
    }

    /// Returns the access key.
    pub fn access_key(&self) -> &SecretString {
        &self.access_key
    }

    /// Returns the secret key.
    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_string_redacted() {
        let secret = SecretString::new("my-secret-key");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(format!("{secret}"), "[REDACTED]");
        assert_eq!(secret.expose_secret(), "my-secret-key");
    }

    #[test]
    fn test_credentials_reject_empty_keys() {
        assert!(Credentials::new("", "secret").is_err());
        assert!(Credentials::new("access", "").is_err());
        assert!(Credentials::new("access", "secret").is_ok());
    }

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("ak", "sk").unwrap();
        let debug = format!("{creds:?}");
        assert!(!debug.contains("ak"));
        assert!(!debug.contains("sk"));
    }
}
