use super::super::{Model, Msg, ResolvedResult};
use super::utils::first_file;
use crate::api::request_diagnosis;
use crate::routing::{self, Route};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::transport::results_url_with_handle;
use shared::upload::Submission;
use shared::{AnalysisResult, ResultReport, TransportFailure};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_chosen(model: &mut Model, file: GlooFile) -> bool {
    match model.form.select(file.name(), file.raw_mime_type(), file.clone()) {
        Ok(()) => {
            model.input_error = None;
            model.preview_url = Some(ObjectUrl::from(file));
        }
        Err(rejected) => {
            log::warn!("Skipping {}: {}", file.name(), rejected);
            model.input_error = Some(rejected.to_string());
        }
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file)
    {
        ctx.link().send_message(Msg::FileChosen(file));
    }

    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.form.begin_submit() {
        Ok(submission) => {
            model.input_error = None;
            send_analysis_request(ctx, submission);
            true
        }
        Err(rejected) => {
            log::debug!("Analysis not started: {}", rejected);
            false
        }
    }
}

pub fn send_analysis_request(ctx: &Context<Model>, submission: Submission<GlooFile>) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            match request_diagnosis(&submission.file.handle, submission.mode).await {
                Ok(result) => link.send_message(Msg::AnalysisSucceeded(result)),
                Err(failure) => link.send_message(Msg::AnalysisFailed(failure)),
            }
        }
    });
}

pub fn handle_analysis_succeeded(model: &mut Model, result: AnalysisResult) -> bool {
    model.form.finish();

    if model.route != Route::Home {
        log::info!("Discarding analysis result that arrived after leaving the upload page");
        return true;
    }

    let id = model.store.put(result);
    handle_navigate(model, &results_url_with_handle(&id))
}

pub fn handle_analysis_failed(model: &mut Model, failure: TransportFailure) -> bool {
    log::error!("Error analyzing image: {}", failure);
    model.form.fail(failure.to_string());
    true
}

pub fn handle_navigate(model: &mut Model, url: &str) -> bool {
    if let Err(e) = routing::push_url(url) {
        log::error!("Failed to update browser history: {:?}", e);
    }
    model.route = Route::parse_url(url);
    resolve_route(model);
    true
}

pub fn handle_route_changed(model: &mut Model) -> bool {
    let route = Route::current();
    if route == model.route {
        return false;
    }
    model.route = route;
    resolve_route(model);
    true
}

/// Loads the result for a results route. Handles are one-shot, so this runs once per
/// navigation and never from `view`.
pub fn resolve_route(model: &mut Model) {
    let Route::Results(source) = &model.route else {
        return;
    };

    model.resolved = source.resolve(&mut model.store).map(|result| {
        let report = ResultReport::from_result(&result);
        ResolvedResult { result, report }
    });

    match &model.resolved {
        Ok(resolved) => log::info!(
            "Showing result: {} ({})",
            resolved.report.verdict,
            resolved.report.confidence_label
        ),
        Err(failure) => log::warn!("No result to show: {}", failure),
    }
}
