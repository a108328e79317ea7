use serde::{Deserialize, Serialize};

use stowage::util::PackConfig;

use crate::io::svg_export::SvgDrawOptions;

/// Configuration for the BLF driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BLFConfig {
    /// Configuration of the packing engine
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for BLFConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
