//! Opaque credential decorator for the request/response channel.
//!
//! Token acquisition (login/registration) is outside the sync core; the core
//! only requires that every authenticated request carries the bearer header.
//! `RemoteChannel` implementations hold a [`BearerToken`] and attach
//! [`BearerToken::authorization_value`] to each request.

/// Opaque bearer credential.
///
/// The token is never inspected by the client. `Debug` output is redacted so
/// credentials cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token obtained from the authentication layer.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Value for the `Authorization` header, in the backend's
    /// `bearer <token>` form.
    pub fn authorization_value(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(..)")
    }
}
