pub mod client;

use futures::future::BoxFuture;
use shared::{AnalysisMode, AnalysisResult};

use crate::upload::ImageUpload;

pub use client::AnalysisClient;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis service unreachable: {0}")]
    Unreachable(String),
    #[error("Analysis service returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("Analysis service returned an invalid body: {0}")]
    InvalidBody(String),
}

/// Something that can classify one uploaded drawing.
pub trait DiagnosisService: Send + Sync {
    fn diagnose(
        &self,
        image: ImageUpload,
        mode: AnalysisMode,
    ) -> BoxFuture<'_, Result<AnalysisResult, AnalysisError>>;
}
