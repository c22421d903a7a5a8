//! Test world directories.

use std::collections::HashSet;

use notooldamage_core::world::WorldDirectory;

/// A directory that knows exactly the worlds it was built with.
#[derive(Debug, Clone, Default)]
pub struct StaticWorldDirectory {
    worlds: HashSet<String>,
}

impl StaticWorldDirectory {
    /// Creates a directory containing `worlds`.
    #[must_use]
    pub fn new<I, S>(worlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            worlds: worlds.into_iter().map(Into::into).collect(),
        }
    }
}

impl WorldDirectory for StaticWorldDirectory {
    fn world_exists(&self, world: &str) -> bool {
        self.worlds.contains(world)
    }
}

/// A directory that claims every world exists. Useful when a test does not
/// care about unresolved-world warnings.
#[derive(Debug, Clone, Copy)]
pub struct AnyWorldDirectory;

impl WorldDirectory for AnyWorldDirectory {
    fn world_exists(&self, _world: &str) -> bool {
        true
    }
}
