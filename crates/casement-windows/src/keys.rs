use casement_core::Modifier;

const VK_SHIFT: i32 = 0x10;
const VK_CONTROL: i32 = 0x11;
const VK_MENU: i32 = 0x12;
const VK_LWIN: i32 = 0x5B;
const VK_RWIN: i32 = 0x5C;

/// Returns the virtual key codes that count as holding `modifier`.
///
/// Shift, Ctrl and Alt have a side-agnostic virtual key. The Windows key
/// does not, so both the left and right keys are listed.
pub fn modifier_vk_codes(modifier: Modifier) -> &'static [i32] {
    match modifier {
        Modifier::Shift => &[VK_SHIFT],
        Modifier::Ctrl => &[VK_CONTROL],
        Modifier::Alt => &[VK_MENU],
        Modifier::Win => &[VK_LWIN, VK_RWIN],
    }
}

/// Returns whether a `GetKeyState` result reports the key as down.
///
/// The high-order bit is set while the key is pressed; the low-order bit
/// only tracks toggle state (Caps Lock style) and is ignored.
pub fn is_down(key_state: i16) -> bool {
    key_state < 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_agnostic_modifiers_map_to_single_key() {
        // Assert
        assert_eq!(modifier_vk_codes(Modifier::Ctrl), &[0x11]);
        assert_eq!(modifier_vk_codes(Modifier::Shift), &[0x10]);
        assert_eq!(modifier_vk_codes(Modifier::Alt), &[0x12]);
    }

    #[test]
    fn win_key_checks_both_sides() {
        // Assert
        assert_eq!(modifier_vk_codes(Modifier::Win), &[0x5B, 0x5C]);
    }

    #[test]
    fn only_high_bit_means_pressed() {
        // Assert
        assert!(is_down(i16::MIN));
        assert!(is_down(-127));
        assert!(!is_down(1)); // toggled, not pressed
        assert!(!is_down(0));
    }
}
