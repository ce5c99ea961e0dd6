use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::upload::{diagnosis_url, IMAGE_FIELD};
use shared::{AnalysisMode, AnalysisResult, TransportFailure};
use web_sys::FormData;

/// Base URL of the analysis endpoint, fixed at build time. Empty means same origin.
const API_BASE: &str = match option_env!("PARKINDETECT_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Single multipart POST; no retry and no client-side timeout.
pub async fn request_diagnosis(
    file: &GlooFile,
    mode: AnalysisMode,
) -> Result<AnalysisResult, TransportFailure> {
    let form_data = FormData::new()
        .map_err(|e| TransportFailure::Network(format!("Failed to build form data: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(IMAGE_FIELD, file.as_ref(), &file.name())
        .map_err(|e| TransportFailure::Network(format!("Failed to attach image: {:?}", e)))?;

    let url = diagnosis_url(API_BASE, mode);
    log::info!("Requesting {} analysis of {}", mode, file.name());

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| TransportFailure::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportFailure::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(TransportFailure::Status { status, body });
    }

    response
        .json::<AnalysisResult>()
        .await
        .map_err(|e| TransportFailure::InvalidBody(e.to_string()))
}
