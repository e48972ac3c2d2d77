/*!
# RTS Camera

Camera subsystem for a real-time strategy renderer.

Each camera role (player, shadow caster, water reflection, visibility
culling, ...) keeps a position, a rotation triple and a field of view,
and derives every frame what the renderer needs from them.

## Architecture

- **Orientation**: rotation triple <-> forward/right/up basis
- **Matrices**: perspective and look-at matrices with their inverses
- **Frustum**: four side planes and box/sphere visibility tests
- **View range**: near/far scaled with altitude and viewing angle
- **Footprint**: frustum sides traced on the ground, clipped per depth row
- **Movement**: held keys or edge scrolling turned into a per-frame delta
- **CameraSet**: one camera per role, with explicit culling synchronisation

Configuration comes from a TOML file (`CameraConfig`); render settings and
terrain queries are passed in by the caller each frame.
*/

// Internal modules
mod error;
pub mod camera;
pub mod config;
pub mod log;
pub mod settings;
pub mod terrain;

// Main rtscam namespace module
pub mod rtscam {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::CameraConfig;

    // Per-frame collaborators
    pub use crate::settings::{RenderSettings, NEAR_PLANE, MAX_VIEW_RANGE};
    pub use crate::terrain::{MapExtents, StaticTerrain, TerrainQuery, SQUARE_SIZE};

    // Logging sub-module (types and logger slot, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

pub use error::{Error, Result};

// Re-export math library at crate root
pub use glam;
