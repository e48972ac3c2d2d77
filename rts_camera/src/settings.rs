//! Render settings consumed by every camera update.
//!
//! The renderer owns one `RenderSettings` value and refreshes it when the
//! window changes or a frame ends; cameras only read it.

use glam::IVec2;

/// Near-plane distance at the reference view range
pub const NEAR_PLANE: f32 = 2.8;
/// Reference far-plane distance
pub const MAX_VIEW_RANGE: f32 = 8000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// View width / view height
    pub aspect_ratio: f32,
    /// Reference near-plane distance
    pub near_plane: f32,
    /// Reference far-plane distance
    pub max_view_range: f32,
    /// Game view origin inside the window, pixels
    pub view_pos: IVec2,
    /// Game view size, pixels
    pub view_size: IVec2,
    /// Duration of the previous frame, milliseconds
    pub last_frame_time: f32,
    /// Split the window between game view and minimap
    pub dual_screen: bool,
    /// In dual-screen mode, put the minimap on the left half
    pub dual_screen_minimap_on_left: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(IVec2::new(1024, 768))
    }
}

impl RenderSettings {
    /// Settings for a single-screen window of the given size.
    pub fn new(window_size: IVec2) -> Self {
        let mut settings = Self {
            aspect_ratio: 1.0,
            near_plane: NEAR_PLANE,
            max_view_range: MAX_VIEW_RANGE,
            view_pos: IVec2::ZERO,
            view_size: window_size,
            last_frame_time: 0.0,
            dual_screen: false,
            dual_screen_minimap_on_left: false,
        };
        settings.update_view_geometry(window_size);
        settings
    }

    /// Recompute the game view rectangle and aspect ratio from the window size.
    ///
    /// In dual-screen mode the game view takes one half of the window and
    /// the minimap the other.
    pub fn update_view_geometry(&mut self, window_size: IVec2) {
        let window_size = window_size.max(IVec2::ZERO);

        if self.dual_screen {
            let half = window_size.x / 2;
            self.view_size = IVec2::new(half, window_size.y);
            self.view_pos = IVec2::new(if self.dual_screen_minimap_on_left { half } else { 0 }, 0);
        } else {
            self.view_size = window_size;
            self.view_pos = IVec2::ZERO;
        }

        // an empty (minimised) view still needs a usable projection
        self.aspect_ratio = self.view_size.x.max(1) as f32 / self.view_size.y.max(1) as f32;
    }

    /// Reference near/far ratio every adapted view range keeps.
    pub fn reference_ratio(&self) -> f32 {
        self.max_view_range / self.near_plane
    }
}
