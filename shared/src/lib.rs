use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod channel;
pub mod error;
pub mod report;
pub mod transport;
pub mod upload;

pub use channel::OneShotStore;
pub use error::{DecodeFailure, InputRejected, TransportFailure};
pub use report::{ResultReport, Verdict};
pub use uuid::Uuid;

/// One screening outcome as returned by the analysis service.
///
/// The service has been seen to name the classification either `diagnosis` or
/// `status`, so both are accepted and [`AnalysisResult::classification`] picks one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub details: String,
}

impl AnalysisResult {
    pub fn new(status: impl Into<String>, confidence: f64) -> Self {
        Self {
            diagnosis: None,
            status: Some(status.into()),
            confidence,
            details: String::new(),
        }
    }

    pub fn classification(&self) -> Option<&str> {
        self.diagnosis.as_deref().or(self.status.as_deref())
    }
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Spiral,
    Wave,
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Spiral => "Spiral",
            AnalysisMode::Wave => "Wave",
        }
    }
}
