//! Input events sent from the windowing layer to the simulation.
//!
//! Events are queued and folded into intent flags at the next frame boundary.

use serde::{Deserialize, Serialize};

/// Primary mouse button index as reported by the browser.
pub const MOUSE_BUTTON_LEFT: u8 = 0;

/// All raw input the simulation understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    // --- Keyboard ---
    /// Key pressed. `code` is a physical key code such as `"KeyW"` or `"Space"`.
    KeyDown { code: String },
    /// Key released.
    KeyUp { code: String },

    // --- Mouse ---
    MouseDown { button: u8 },
    MouseUp { button: u8 },
    /// Relative pointer motion in pixels.
    MouseMove { dx: f32, dy: f32 },

    // --- Focus ---
    /// Pointer lock acquired (`true`) or released (`false`).
    PointerLock { locked: bool },
}

impl InputEvent {
    pub fn key_down(code: &str) -> Self {
        InputEvent::KeyDown {
            code: code.to_string(),
        }
    }

    pub fn key_up(code: &str) -> Self {
        InputEvent::KeyUp {
            code: code.to_string(),
        }
    }
}
