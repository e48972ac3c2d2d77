//! Terrain queries the camera needs: lowest terrain height and map size.

/// World units per map grid square
pub const SQUARE_SIZE: f32 = 8.0;

/// Horizontal map size in grid squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapExtents {
    pub size_x: u32,
    pub size_z: u32,
}

impl MapExtents {
    pub fn new(size_x: u32, size_z: u32) -> Self {
        Self { size_x, size_z }
    }

    pub fn world_size_x(&self) -> f32 {
        self.size_x as f32 * SQUARE_SIZE
    }

    pub fn world_size_z(&self) -> f32 {
        self.size_z as f32 * SQUARE_SIZE
    }
}

/// Terrain service seam. Implemented by the height map owner.
pub trait TerrainQuery {
    /// Lowest terrain height currently on the map (may be negative)
    fn min_height(&self) -> f32;

    /// Map extents in grid squares
    fn extents(&self) -> MapExtents;
}

/// Terrain with fixed values, for callers without a height map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticTerrain {
    pub min_height: f32,
    pub extents: MapExtents,
}

impl StaticTerrain {
    pub fn new(min_height: f32, extents: MapExtents) -> Self {
        Self { min_height, extents }
    }
}

impl TerrainQuery for StaticTerrain {
    fn min_height(&self) -> f32 {
        self.min_height
    }

    fn extents(&self) -> MapExtents {
        self.extents
    }
}
