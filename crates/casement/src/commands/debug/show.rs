use clap::Args;

/// Arguments for the `debug show` subcommand.
#[derive(Args)]
pub struct ShowArgs {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: String,
}

#[cfg(windows)]
pub fn execute(args: &ShowArgs) {
    use casement_core::Window;

    let window = casement_windows::Window::from_raw(parse_or_exit(&args.hwnd));

    let print = |label: &str, value: Result<String, Box<dyn std::error::Error>>| match value {
        Ok(v) => println!("{label:<15} {v}"),
        Err(e) => println!("{label:<15} <error: {e}>"),
    };

    print("State:", window.state().map(|s| s.to_string()));
    print("Bounds:", window.rect().map(|r| r.to_string()));
    print("Restore bounds:", window.restore_bounds().map(|r| r.to_string()));
    print(
        "Owner:",
        window.owner_position().map(|o| match o {
            Some(p) => format!("at ({}, {})", p.x, p.y),
            None => "none".to_string(),
        }),
    );
}

#[cfg(not(windows))]
pub fn execute(_args: &ShowArgs) {
    eprintln!("Error: window inspection is only available on Windows.");
    std::process::exit(1);
}

#[cfg(windows)]
pub(super) fn parse_or_exit(hwnd: &str) -> usize {
    match crate::commands::parse_hwnd(hwnd) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
