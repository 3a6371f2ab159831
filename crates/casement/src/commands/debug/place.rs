use clap::Args;

use casement_core::Config;

/// Arguments for the `debug place` subcommand.
#[derive(Args)]
pub struct PlaceArgs {
    /// Handle of the owned window (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: String,
    /// Horizontal offset from the owner in pixels
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    dx: i32,
    /// Vertical offset from the owner in pixels
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    dy: i32,
}

#[cfg(windows)]
pub fn execute(args: &PlaceArgs, config: &Config) {
    use casement_core::placement::place_with_cascade;
    use casement_core::{Point, Window};

    let window = casement_windows::Window::from_raw(super::show::parse_or_exit(&args.hwnd));

    match window.owner_position() {
        Ok(Some(_)) => {}
        Ok(None) => {
            println!("Window has no owner; nothing to do.");
            return;
        }
        Err(e) => {
            eprintln!("Error: could not query owner: {e}");
            std::process::exit(1);
        }
    }

    let offset = Point::new(args.dx, args.dy);
    match place_with_cascade(&window, offset, config.placement.cascade()) {
        Ok(()) => println!("Done."),
        Err(e) => eprintln!("Failed to place window: {e}"),
    }
}

#[cfg(not(windows))]
pub fn execute(_args: &PlaceArgs, _config: &Config) {
    eprintln!("Error: window placement is only available on Windows.");
    std::process::exit(1);
}
