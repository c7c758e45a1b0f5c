use crate::core::error::Result;

/// Durability boundary for an external persistence collaborator
///
/// The engine itself never performs I/O; a host that wants durability
/// implements this trait over whatever medium it likes and exchanges
/// point-in-time snapshots with the engine.
pub trait SnapshotStore<S> {
    /// Load the last saved snapshot, if any
    fn load(&self) -> Result<Option<S>>;

    /// Persist a snapshot
    fn save(&self, snapshot: &S) -> Result<()>;
}
