mod loader;
pub mod modifier;
pub mod template;
mod types;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};
pub use modifier::Modifier;
pub use types::{PlacementConfig, SpanConfig};

/// Top-level configuration for Casement.
///
/// Loaded from `~/.config/casement/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multi-monitor pseudo-maximize settings.
    pub span: SpanConfig,
    /// Owned-window placement settings.
    pub placement: PlacementConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Prevents cascade offsets that would push owned windows far away
    /// from their owner and a zero-sized log file limit.
    pub fn validate(&mut self) {
        self.placement.cascade_x = self.placement.cascade_x.clamp(0, 200);
        self.placement.cascade_y = self.placement.cascade_y.clamp(0, 200);
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}
