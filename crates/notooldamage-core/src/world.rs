//! World lookup abstraction.

/// Answers whether a world identifier refers to a world the host knows.
///
/// Resolvability is advisory: a world may be loaded after the regions that
/// reference it.
pub trait WorldDirectory: Send + Sync {
    /// Returns `true` if `world` names a currently loaded world.
    fn world_exists(&self, world: &str) -> bool;
}
