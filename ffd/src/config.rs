use serde::{Deserialize, Serialize};

use optishape::util::NestConfig;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFD optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FFDConfig {
    /// Configuration of the nesting engine
    #[serde(default)]
    pub nest: NestConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
