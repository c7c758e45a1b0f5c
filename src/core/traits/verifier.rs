use crate::core::error::Result;

/// Authentication boundary
///
/// Credential verification is an external collaborator's job; the engine
/// holds no user database and issues no sessions. A host wires a real
/// implementation (password hashes, SSO, whatever) in front of the UI
/// shell and only hands authenticated calls to the engine.
pub trait CredentialVerifier {
    /// Verify a credential pair, returning whether it is valid
    ///
    /// Implementations must reject empty usernames or passwords outright
    /// rather than consulting a backing store.
    fn verify(&self, username: &str, password: &str) -> Result<bool>;
}
