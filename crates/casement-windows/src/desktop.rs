use casement_core::{Desktop, Modifier, Rect, WindowResult};
use windows::Win32::UI::Input::KeyboardAndMouse::GetKeyState;

use crate::keys;
use crate::monitor;

/// The live Win32 desktop: attached displays and keyboard state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

impl Desktop for Win32Desktop {
    fn work_areas(&self) -> WindowResult<Vec<Rect>> {
        Ok(monitor::enumerate_monitors()?
            .into_iter()
            .map(|m| m.work_area)
            .collect())
    }

    fn is_modifier_held(&self, modifier: Modifier) -> bool {
        keys::modifier_vk_codes(modifier).iter().any(|&vk| {
            // SAFETY: GetKeyState only reads the calling thread's key state.
            keys::is_down(unsafe { GetKeyState(vk) })
        })
    }
}
