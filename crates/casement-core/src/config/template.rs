/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `casement init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Casement configuration
# Location: ~/.config/casement/config.toml

[span]
# Hold the modifier while maximizing to stretch the window across every
# monitor. Monitors are assumed to sit side by side in a single row.
enabled = true
# Modifier key: "ctrl", "alt", "shift", or "win".
modifier = "ctrl"

[placement]
# Pixels added to the owner's position when placing an owned window.
cascade_x = 20
cascade_y = 20

[logging]
# Enable file logging to ~/.config/casement/logs/casement.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
