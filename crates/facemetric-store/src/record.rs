use chrono::{DateTime, Utc};
use facemetric_core::{FaceShape, Ratios};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the analyzed face came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Camera,
    Upload,
    Manual,
}

impl AnalysisSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Camera => "camera",
            AnalysisSource::Upload => "upload",
            AnalysisSource::Manual => "manual",
        }
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AnalysisSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camera" => Ok(AnalysisSource::Camera),
            "upload" => Ok(AnalysisSource::Upload),
            "manual" => Ok(AnalysisSource::Manual),
            other => Err(format!("unknown analysis source: {other:?}")),
        }
    }
}

/// A stored analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub user: String,
    pub date: DateTime<Utc>,
    pub shape: FaceShape,
    pub score: u8,
    pub ratios: Ratios,
    #[serde(rename = "type")]
    pub source: AnalysisSource,
}
