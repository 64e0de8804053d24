//! Intent flags folded from raw input events.

use glam::Vec2;

use outbreak_core::commands::{InputEvent, MOUSE_BUTTON_LEFT};
use outbreak_core::enums::WeaponKind;

/// Held-key and pending one-shot intents.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Trigger held via keyboard.
    trigger_key: bool,
    /// Trigger held via mouse.
    trigger_mouse: bool,
    /// Weapon selected since the last frame.
    pending_weapon: Option<WeaponKind>,
    /// Accumulated look delta in pixels.
    look: Vec2,
}

impl InputState {
    /// Fold one event into the intent flags. Pointer-lock events are handled
    /// by the engine, not here.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { code } => self.set_key(code, true),
            InputEvent::KeyUp { code } => self.set_key(code, false),
            InputEvent::MouseDown { button } if *button == MOUSE_BUTTON_LEFT => {
                self.trigger_mouse = true;
            }
            InputEvent::MouseUp { button } if *button == MOUSE_BUTTON_LEFT => {
                self.trigger_mouse = false;
            }
            InputEvent::MouseMove { dx, dy } => {
                self.look += Vec2::new(*dx, *dy);
            }
            InputEvent::MouseDown { .. }
            | InputEvent::MouseUp { .. }
            | InputEvent::PointerLock { .. } => {}
        }
    }

    fn set_key(&mut self, code: &str, down: bool) {
        match code {
            "KeyW" | "ArrowUp" => self.forward = down,
            "KeyS" | "ArrowDown" => self.backward = down,
            "KeyA" | "ArrowLeft" => self.left = down,
            "KeyD" | "ArrowRight" => self.right = down,
            "Space" => self.trigger_key = down,
            "Digit1" if down => self.pending_weapon = Some(WeaponKind::Pistol),
            "Digit2" if down => self.pending_weapon = Some(WeaponKind::Shotgun),
            "Digit3" if down => self.pending_weapon = Some(WeaponKind::Rifle),
            _ => {}
        }
    }

    /// Whether the trigger is held by any device.
    pub fn shooting(&self) -> bool {
        self.trigger_key || self.trigger_mouse
    }

    /// Movement axes as (right, forward), each in {-1, 0, 1}.
    pub fn move_axes(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| pos as i32 as f32 - neg as i32 as f32;
        Vec2::new(axis(self.right, self.left), axis(self.forward, self.backward))
    }

    /// Take and clear the accumulated look delta.
    pub fn take_look(&mut self) -> Vec2 {
        std::mem::take(&mut self.look)
    }

    pub fn take_weapon_selection(&mut self) -> Option<WeaponKind> {
        self.pending_weapon.take()
    }

    /// Drop every held intent (focus lost).
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_share_axes() {
        let mut input = InputState::default();
        input.apply(&InputEvent::key_down("ArrowUp"));
        input.apply(&InputEvent::key_down("KeyD"));
        assert_eq!(input.move_axes(), Vec2::new(1.0, 1.0));
        input.apply(&InputEvent::key_down("KeyS"));
        assert_eq!(input.move_axes(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_trigger_from_either_device() {
        let mut input = InputState::default();
        input.apply(&InputEvent::MouseDown { button: 0 });
        input.apply(&InputEvent::key_down("Space"));
        input.apply(&InputEvent::key_up("Space"));
        assert!(input.shooting());
        input.apply(&InputEvent::MouseUp { button: 0 });
        assert!(!input.shooting());
        input.apply(&InputEvent::MouseDown { button: 2 });
        assert!(!input.shooting());
    }

    #[test]
    fn test_release_all_clears_intents() {
        let mut input = InputState::default();
        input.apply(&InputEvent::key_down("KeyW"));
        input.apply(&InputEvent::key_down("Digit3"));
        input.apply(&InputEvent::MouseMove { dx: 4.0, dy: 1.0 });
        input.release_all();
        assert_eq!(input.move_axes(), Vec2::ZERO);
        assert_eq!(input.take_look(), Vec2::ZERO);
        assert_eq!(input.take_weapon_selection(), None);
    }

    #[test]
    fn test_look_accumulates_until_taken() {
        let mut input = InputState::default();
        input.apply(&InputEvent::MouseMove { dx: 3.0, dy: -1.0 });
        input.apply(&InputEvent::MouseMove { dx: 2.0, dy: -1.0 });
        assert_eq!(input.take_look(), Vec2::new(5.0, -2.0));
        assert_eq!(input.take_look(), Vec2::ZERO);
    }
}
