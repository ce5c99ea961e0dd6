use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use shared::upload::{DIAGNOSIS_PATH, IMAGE_FIELD, MODE_PARAM};
use shared::{AnalysisMode, AnalysisResult};
use std::time::Duration;
use url::Url;

use super::{AnalysisError, DiagnosisService};
use crate::upload::ImageUpload;

/// Forwards uploads to the external analysis service. One attempt per request.
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    base_url: Url,
}

impl AnalysisClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// `{base}/api/diagnosis?type={mode}`, keeping any path prefix of the base URL.
    pub fn endpoint(&self, mode: AnalysisMode) -> Result<Url, AnalysisError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base
            .join(DIAGNOSIS_PATH.trim_start_matches('/'))
            .map_err(|e| AnalysisError::Unreachable(e.to_string()))?;
        url.query_pairs_mut()
            .clear()
            .append_pair(MODE_PARAM, mode.as_ref());
        Ok(url)
    }

    pub async fn diagnose_image(
        &self,
        image: ImageUpload,
        mode: AnalysisMode,
    ) -> Result<AnalysisResult, AnalysisError> {
        let url = self.endpoint(mode)?;
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)
            .map_err(|e| AnalysisError::InvalidBody(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalysisError::InvalidBody(e.to_string()))
    }
}

impl DiagnosisService for AnalysisClient {
    fn diagnose(
        &self,
        image: ImageUpload,
        mode: AnalysisMode,
    ) -> BoxFuture<'_, Result<AnalysisResult, AnalysisError>> {
        self.diagnose_image(image, mode).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> AnalysisClient {
        AnalysisClient::new(Url::parse(base).unwrap(), None).unwrap()
    }

    #[test]
    fn test_endpoint_carries_mode_as_query() {
        let url = client("http://127.0.0.1:8000").endpoint(AnalysisMode::Spiral).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/diagnosis?type=spiral");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("https://analysis.example.org/v1/")
            .endpoint(AnalysisMode::Wave)
            .unwrap();
        assert_eq!(url.as_str(), "https://analysis.example.org/v1/api/diagnosis?type=wave");

        let url = client("https://analysis.example.org/v1")
            .endpoint(AnalysisMode::Wave)
            .unwrap();
        assert_eq!(url.as_str(), "https://analysis.example.org/v1/api/diagnosis?type=wave");
    }

    #[test]
    fn test_endpoint_drops_base_query() {
        let url = client("http://127.0.0.1:8000/?type=circle")
            .endpoint(AnalysisMode::Spiral)
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/diagnosis?type=spiral");
    }

    #[actix_web::test]
    async fn test_unreachable_service_is_reported() {
        // Bind then release a port so nothing is listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client(&format!("http://127.0.0.1:{}", port));
        let image = ImageUpload {
            file_name: "spiral.png".into(),
            mime: "image/png".into(),
            bytes: crate::upload::tests::PNG_HEADER.to_vec(),
            digest: String::new(),
        };
        let result = client.diagnose_image(image, AnalysisMode::Spiral).await;
        assert!(matches!(result, Err(AnalysisError::Unreachable(_))));
    }
}
