use actix_files::{Files, NamedFile};
use actix_multipart::Multipart;
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpResponse};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use shared::AnalysisMode;
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

use crate::analysis::DiagnosisService;
use crate::error::ApiError;
use crate::upload::read_image;

/// Upload limits shared with the diagnosis handler.
#[derive(Clone, Copy)]
pub struct UploadLimits {
    pub max_image_bytes: usize,
}

#[derive(Debug, Deserialize)]
pub struct DiagnosisQuery {
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/diagnosis").route(web::post().to(handle_diagnosis)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

/// Serves the built frontend; unknown paths get `index.html` so client routes such as
/// `/results` load the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);

    let index = frontend_dir.join("index.html");
    cfg.service(
        Files::new("/", frontend_dir)
            .index_file("index.html")
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}

pub fn parse_mode(raw: Option<&str>) -> Result<AnalysisMode, ApiError> {
    match raw {
        None => Ok(AnalysisMode::default()),
        Some(value) => {
            AnalysisMode::from_str(value).map_err(|_| ApiError::UnknownMode(value.to_string()))
        }
    }
}

async fn handle_diagnosis(
    service: web::Data<dyn DiagnosisService>,
    limits: web::Data<UploadLimits>,
    query: web::Query<DiagnosisQuery>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let mode = parse_mode(query.mode.as_deref())?;

    let image = read_image(payload, limits.max_image_bytes).await.map_err(|e| {
        info!("[{}] Rejected upload: {}", request_id, e);
        e
    })?;
    info!(
        "[{}] Forwarding {} analysis: {} ({}, {} bytes, sha256 {})",
        request_id,
        mode,
        image.file_name,
        image.mime,
        image.bytes.len(),
        image.digest
    );

    match service.diagnose(image, mode).await {
        Ok(result) => {
            info!(
                "[{}] Analysis finished: {:?} at {}",
                request_id,
                result.classification(),
                result.confidence
            );
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            error!("[{}] Analysis failed: {}", request_id, e);
            Err(e.into())
        }
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
