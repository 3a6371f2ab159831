use casement_core::WindowState;

const WS_MINIMIZE: u32 = 0x2000_0000;
const WS_MAXIMIZE: u32 = 0x0100_0000;

/// Returns `style` with its show-state bits set for `state`.
///
/// Used on windows that are not visible yet: `ShowWindow` would show
/// them, while flipping these bits only changes the state they appear in.
pub fn with_state(style: u32, state: WindowState) -> u32 {
    let cleared = style & !(WS_MINIMIZE | WS_MAXIMIZE);
    match state {
        WindowState::Normal => cleared,
        WindowState::Minimized => cleared | WS_MINIMIZE,
        WindowState::Maximized => cleared | WS_MAXIMIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // WS_OVERLAPPEDWINDOW
    const FRAME: u32 = 0x00CF_0000;

    #[test]
    fn maximize_sets_only_the_maximize_bit() {
        // Act
        let style = with_state(FRAME | WS_MINIMIZE, WindowState::Maximized);

        // Assert
        assert_eq!(style, FRAME | WS_MAXIMIZE);
    }

    #[test]
    fn normal_clears_both_state_bits() {
        // Act
        let style = with_state(FRAME | WS_MAXIMIZE, WindowState::Normal);

        // Assert
        assert_eq!(style, FRAME);
    }

    #[test]
    fn unchanged_state_keeps_style() {
        // Assert
        assert_eq!(with_state(FRAME, WindowState::Normal), FRAME);
        assert_eq!(
            with_state(FRAME | WS_MAXIMIZE, WindowState::Maximized),
            FRAME | WS_MAXIMIZE
        );
    }
}
