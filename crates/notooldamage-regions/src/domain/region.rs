//! Region value type and block positions.

use std::fmt;

use notooldamage_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// An integer block coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockCoords {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockCoords {
    /// Creates a coordinate triple.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A block position inside a named world.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    /// World identifier.
    pub world: String,
    /// Block coordinates.
    pub coords: BlockCoords,
}

impl BlockPosition {
    /// Creates a block position from integer coordinates.
    #[must_use]
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            coords: BlockCoords::new(x, y, z),
        }
    }

    /// Creates the block position containing an exact entity location.
    ///
    /// Each component is floored, so `-0.5` lands in block `-1`. Values
    /// outside the `i32` range saturate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_location(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self::new(
            world,
            x.floor() as i32,
            y.floor() as i32,
            z.floor() as i32,
        )
    }
}

/// An axis-aligned, inclusive box of blocks bound to one world.
///
/// Immutable once built; `min <= max` holds on every axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    name: String,
    world: String,
    min: BlockCoords,
    max: BlockCoords,
}

impl Region {
    /// Creates a region from its two corners.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedBounds` for the first axis on which
    /// `min` exceeds `max`.
    pub fn new(
        name: impl Into<String>,
        world: impl Into<String>,
        min: BlockCoords,
        max: BlockCoords,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        for (axis, lo, hi) in [('x', min.x, max.x), ('y', min.y, max.y), ('z', min.z, max.z)] {
            if lo > hi {
                return Err(DomainError::InvertedBounds {
                    region: name,
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self {
            name,
            world: world.into(),
            min,
            max,
        })
    }

    /// The configuration key this region was loaded from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The world this region belongs to.
    #[must_use]
    pub fn world(&self) -> &str {
        &self.world
    }

    /// Inclusive lower corner.
    #[must_use]
    pub fn min(&self) -> BlockCoords {
        self.min
    }

    /// Inclusive upper corner.
    #[must_use]
    pub fn max(&self) -> BlockCoords {
        self.max
    }

    /// Returns `true` if the position is in this region's world and inside
    /// its bounds on every axis.
    #[must_use]
    pub fn contains(&self, world: &str, coords: BlockCoords) -> bool {
        self.world == world
            && (self.min.x..=self.max.x).contains(&coords.x)
            && (self.min.y..=self.max.y).contains(&coords.y)
            && (self.min.z..=self.max.z).contains(&coords.z)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [world={}, x1={}, y1={}, z1={}, x2={}, y2={}, z2={}]",
            self.name,
            self.world,
            self.min.x,
            self.min.y,
            self.min.z,
            self.max.x,
            self.max.y,
            self.max.z
        )
    }
}
