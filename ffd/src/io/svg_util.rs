use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub theme: SvgLayoutTheme,
    /// Draws the bounding box of every placed part
    pub bboxes: bool,
    /// Writes the id of every placed part at its centroid
    pub labels: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            bboxes: false,
            labels: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutTheme {
    #[default]
    EarthTones,
    Gray,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgColors {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: &'static str,
    pub part_fill: &'static str,
    pub bbox_stroke: &'static str,
}

impl SvgLayoutTheme {
    pub fn colors(&self) -> SvgColors {
        match self {
            SvgLayoutTheme::EarthTones => EARTH_TONES,
            SvgLayoutTheme::Gray => GRAY,
        }
    }
}

pub static EARTH_TONES: SvgColors = SvgColors {
    stroke_width_multiplier: 2.0,
    sheet_fill: "#CC824A",
    part_fill: "#FFC879",
    bbox_stroke: "#8B0000",
};

pub static GRAY: SvgColors = SvgColors {
    stroke_width_multiplier: 2.5,
    sheet_fill: "#C3C3C3",
    part_fill: "#8F8F8F",
    bbox_stroke: "#2D2D2D",
};
