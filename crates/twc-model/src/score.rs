use std::fmt;

use serde::{Deserialize, Serialize};

/// WCAG 2.0 rating of a contrast ratio for text.
///
/// Variants are ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "Fail")]
    Fail,
    /// Passes AA for large text only.
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// True when normal-size text passes at least level AA.
    pub fn passes_normal_text(self) -> bool {
        self >= Self::Aa
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contrast of one foreground against one background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Luminance contrast ratio in `[1, 21]`.
    pub ratio: f64,
    pub grade: Grade,
}
