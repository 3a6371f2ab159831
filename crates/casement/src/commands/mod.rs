pub mod debug;
pub mod init;
pub mod monitors;
pub mod restore;
pub mod span;

use casement_core::Rect;

/// Returns the given work areas, or the live ones when none were given.
///
/// Live enumeration only exists on Windows; elsewhere the caller must
/// pass `--work-area` explicitly.
pub fn work_areas_or_live(given: &[Rect]) -> Vec<Rect> {
    if !given.is_empty() {
        return given.to_vec();
    }
    live_work_areas()
}

#[cfg(windows)]
fn live_work_areas() -> Vec<Rect> {
    use casement_core::Desktop;

    match casement_windows::Win32Desktop::new().work_areas() {
        Ok(areas) => areas,
        Err(e) => {
            eprintln!("Error: could not enumerate monitors: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
fn live_work_areas() -> Vec<Rect> {
    eprintln!("Error: monitor enumeration is only available on Windows; pass --work-area.");
    std::process::exit(1);
}

/// Parses a window handle from a string (supports decimal and 0x hex).
#[cfg_attr(not(windows), allow(dead_code))]
pub fn parse_hwnd(s: &str) -> Result<usize, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid window handle '{s}': {e}"))
}
