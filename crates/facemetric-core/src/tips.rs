//! Styling suggestions per face shape.
//!
//! The table is embedded at compile time from `contrib/tips/styling.toml`
//! and parsed once on first use.

use crate::types::FaceShape;
use serde::Deserialize;
use std::sync::OnceLock;

const STYLING_TOML: &str = include_str!("../../../contrib/tips/styling.toml");

static TIPS_DB: OnceLock<Vec<StylingTips>> = OnceLock::new();

/// Top-level structure of the tips file.
#[derive(Debug, Deserialize)]
struct TipsFile {
    shape: Vec<StylingTips>,
}

/// Hairstyle, glasses and makeup suggestions for one shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StylingTips {
    #[serde(rename = "name")]
    pub shape: FaceShape,
    pub hairstyle: String,
    pub glasses: String,
    pub makeup: Option<String>,
}

fn parse_tips(src: &str) -> Result<Vec<StylingTips>, toml::de::Error> {
    toml::from_str::<TipsFile>(src).map(|file| file.shape)
}

fn tips_db() -> &'static Vec<StylingTips> {
    TIPS_DB.get_or_init(|| match parse_tips(STYLING_TOML) {
        Ok(tips) => tips,
        Err(e) => {
            tracing::error!(error = %e, "bad styling tips TOML");
            Vec::new()
        }
    })
}

/// Look up the suggestions for a shape.
pub fn styling_tips(shape: FaceShape) -> Option<&'static StylingTips> {
    tips_db().iter().find(|t| t.shape == shape)
}

/// All known suggestions, in file order.
pub fn list_tips() -> &'static [StylingTips] {
    tips_db()
}
