/// Frustum footprint: the traces of the frustum side planes on horizontal
/// slices, used by the terrain and shadow renderers to bound the visible
/// x-range per depth row.
///
/// Each side plane becomes a `FrustumLine` in the ground (x, z) plane:
/// `x = base + slope * z`, both in grid units. Lines are rebuilt from
/// scratch on every extraction and only live for one frame.

use glam::Vec3;
use crate::terrain::{MapExtents, SQUARE_SIZE};
use super::frustum::FrustumPlanes;
use super::orientation::safe_normalize;

/// Smallest |xdir.z| used when computing a line slope.
const MIN_XDIR_Z: f32 = 0.001;

/// One frustum side projected onto the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumLine {
    /// dx/dz of the trace
    pub slope: f32,
    /// x at z = 0, grid units
    pub base: f32,
    /// Travel direction along the trace: +1 or -1
    pub sign: i32,
    /// Lowest z (grid units) where this line bounds the footprint
    pub z_min: f32,
    /// Highest z (grid units) where this line bounds the footprint
    pub z_max: f32,
}

impl FrustumLine {
    /// x (grid units) of the trace at row `z` (grid units)
    #[inline]
    pub fn x_at(&self, z: f32) -> f32 {
        self.base + self.slope * z
    }

    /// Whether row `z` lies in this line's clipped span
    #[inline]
    pub fn covers(&self, z: f32) -> bool {
        z >= self.z_min && z <= self.z_max
    }
}

/// Positive- and negative-side frustum lines of one camera.
#[derive(Debug, Clone, Default)]
pub struct FrustumFootprint {
    pub positive: Vec<FrustumLine>,
    pub negative: Vec<FrustumLine>,
}

impl FrustumFootprint {
    pub fn new() -> Self {
        Self {
            positive: Vec::with_capacity(4),
            negative: Vec::with_capacity(4),
        }
    }

    /// Rebuild both line sets from the side planes of a camera at `position`.
    ///
    /// Planes tilting towards the sky are traced at `min_y`, planes tilting
    /// towards the ground at `max_y`. `scale` converts world units to grid
    /// units. With `force_negative` every line goes to the negative set.
    pub fn extract(
        &mut self,
        planes: &FrustumPlanes,
        position: Vec3,
        min_y: f32,
        max_y: f32,
        scale: f32,
        force_negative: bool,
        extents: MapExtents,
    ) {
        self.positive.clear();
        self.negative.clear();

        for zdir in &planes.planes {
            let line = side_line(*zdir, position, min_y, max_y, scale, extents);

            if line.sign == 1 || force_negative {
                self.negative.push(line);
            } else {
                self.positive.push(line);
            }
        }
    }

    pub fn lines(&self, negative: bool) -> &[FrustumLine] {
        if negative {
            &self.negative
        } else {
            &self.positive
        }
    }

    /// Narrow each line's z-span to where it is the binding side.
    ///
    /// Every ordered pair of non-parallel lines in the chosen set is
    /// intersected; the crossing raises `z_min` or lowers `z_max` of the
    /// first line depending on the side the second line approaches from.
    /// Crossings outside `(z_min, z_max)` are ignored.
    pub fn clip(&mut self, negative: bool, z_min: f32, z_max: f32) {
        let lines = if negative { &mut self.negative } else { &mut self.positive };

        for i in 0..lines.len() {
            for j in 0..lines.len() {
                if i == j {
                    continue;
                }

                let other = lines[j];
                let line = &mut lines[i];

                let d_base = line.base - other.base;
                let d_slope = line.slope - other.slope;

                // parallel
                if d_slope == 0.0 {
                    continue;
                }

                let cross_z = -(d_base / d_slope);

                if other.sign as f32 * d_slope > 0.0 {
                    if cross_z > line.z_min && cross_z < z_max {
                        line.z_min = cross_z;
                    }
                } else if cross_z < line.z_max && cross_z > z_min {
                    line.z_max = cross_z;
                }
            }
        }
    }
}

/// Trace of one side plane (normal `zdir`, through `position`) on a
/// horizontal slice.
fn side_line(
    zdir: Vec3,
    position: Vec3,
    min_y: f32,
    max_y: f32,
    scale: f32,
    extents: MapExtents,
) -> FrustumLine {
    // orthonormal axes inside the plane; xdir is horizontal
    let mut xdir = safe_normalize(zdir.cross(Vec3::Y));
    let ydir = safe_normalize(zdir.cross(xdir));

    if xdir.z.abs() < MIN_XDIR_Z {
        xdir.z = MIN_XDIR_Z;
    }

    // where the in-plane ray along ydir meets the slice; a horizontal ydir
    // never does, so fall back to the camera position
    let hit = if ydir.y != 0.0 {
        let slice_y = if zdir.y > 0.0 { min_y } else { max_y };
        position - ydir * ((position.y - slice_y) / ydir.y)
    } else {
        position
    };

    let slope = xdir.x / xdir.z;
    let size_z = extents.size_z as f32;

    FrustumLine {
        slope,
        base: (hit.x - hit.z * slope) / scale,
        sign: if xdir.z <= 0.0 { 1 } else { -1 },
        z_min: -size_z,
        z_max: size_z * SQUARE_SIZE + size_z,
    }
}

#[cfg(test)]
#[path = "footprint_tests.rs"]
mod tests;
