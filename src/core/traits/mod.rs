pub mod repository;
pub mod snapshot;
pub mod verifier;

pub use repository::Repository;
pub use snapshot::SnapshotStore;
pub use verifier::CredentialVerifier;
