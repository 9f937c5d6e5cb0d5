/*
 * Debug Information Module
 *
 * Frame metrics displayed in the UI and the on-screen overlay.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub collisions_last_frame: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            collisions_last_frame: 0,
        }
    }
}
