/// winit input translation for camera movement.

use glam::IVec2;
use winit::dpi::PhysicalPosition;
use winit::event::ElementState;
use winit::keyboard::KeyCode;
use super::movement::MoveFlags;

/// Movement flag bound to a physical key, if any.
pub fn move_flag_for_key(key: KeyCode) -> Option<MoveFlags> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveFlags::FORWARD),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveFlags::BACK),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveFlags::LEFT),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveFlags::RIGHT),
        KeyCode::PageUp => Some(MoveFlags::UP),
        KeyCode::PageDown => Some(MoveFlags::DOWN),
        KeyCode::ControlLeft | KeyCode::ControlRight => Some(MoveFlags::SLOW),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(MoveFlags::FAST),
        _ => None,
    }
}

/// Update `flags` from a key event. Returns false for unbound keys.
pub fn apply_key(flags: &mut MoveFlags, key: KeyCode, state: ElementState) -> bool {
    match move_flag_for_key(key) {
        Some(flag) => {
            flags.set(flag, state == ElementState::Pressed);
            true
        }
        None => false,
    }
}

/// Integer pixel position of a winit cursor position.
pub fn cursor_from_physical(position: PhysicalPosition<f64>) -> IVec2 {
    IVec2::new(position.x.floor() as i32, position.y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_share_flags() {
        assert_eq!(move_flag_for_key(KeyCode::KeyW), Some(MoveFlags::FORWARD));
        assert_eq!(move_flag_for_key(KeyCode::ArrowUp), Some(MoveFlags::FORWARD));
        assert_eq!(move_flag_for_key(KeyCode::KeyA), move_flag_for_key(KeyCode::ArrowLeft));
        assert_eq!(move_flag_for_key(KeyCode::ShiftRight), Some(MoveFlags::FAST));
        assert_eq!(move_flag_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_apply_key_press_and_release() {
        let mut flags = MoveFlags::empty();
        assert!(apply_key(&mut flags, KeyCode::KeyD, ElementState::Pressed));
        assert!(apply_key(&mut flags, KeyCode::ControlLeft, ElementState::Pressed));
        assert_eq!(flags, MoveFlags::RIGHT | MoveFlags::SLOW);

        assert!(apply_key(&mut flags, KeyCode::KeyD, ElementState::Released));
        assert_eq!(flags, MoveFlags::SLOW);

        assert!(!apply_key(&mut flags, KeyCode::Space, ElementState::Pressed));
        assert_eq!(flags, MoveFlags::SLOW);
    }

    #[test]
    fn test_cursor_floor() {
        let p = cursor_from_physical(PhysicalPosition::new(12.7, 3.2));
        assert_eq!(p, IVec2::new(12, 3));
    }
}
