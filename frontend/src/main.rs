mod api;
mod components;
mod routing;

use components::{handlers, header, landing, results, upload_section};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use routing::Route;
use shared::upload::UploadForm;
use shared::{AnalysisMode, AnalysisResult, DecodeFailure, OneShotStore, ResultReport, TransportFailure};
use web_sys::DragEvent;
use yew::prelude::*;

/// A result recovered by the Results View together with its display model.
#[derive(Clone, Debug)]
struct ResolvedResult {
    result: AnalysisResult,
    report: ResultReport,
}

// Yew msg components
enum Msg {
    // File selection
    FileChosen(GlooFile),
    SetDragging(bool),
    HandleDrop(DragEvent),
    SetMode(AnalysisMode),

    // Analysis
    Analyze,
    AnalysisSucceeded(AnalysisResult),
    AnalysisFailed(TransportFailure),

    // Navigation
    Navigate(String),
    RouteChanged,
    ScrollToUpload,
}

// Main component
struct Model {
    route: Route,
    form: UploadForm<GlooFile>,
    preview_url: Option<ObjectUrl>,
    input_error: Option<String>,
    is_dragging: bool,
    store: OneShotStore,
    resolved: Result<ResolvedResult, DecodeFailure>,
    popstate_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            route: Route::current(),
            form: UploadForm::default(),
            preview_url: None,
            input_error: None,
            is_dragging: false,
            store: OneShotStore::default(),
            resolved: Err(DecodeFailure::Missing),
            popstate_listener: None,
        };
        handlers::resolve_route(&mut model);

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "popstate", move |_| {
                link.send_message(Msg::RouteChanged);
            });
            model.popstate_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetMode(mode) => {
                self.form.set_mode(mode);
                true
            }

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisSucceeded(result) => handlers::handle_analysis_succeeded(self, result),
            Msg::AnalysisFailed(failure) => handlers::handle_analysis_failed(self, failure),

            Msg::Navigate(url) => handlers::handle_navigate(self, &url),
            Msg::RouteChanged => handlers::handle_route_changed(self),
            Msg::ScrollToUpload => {
                components::utils::scroll_to(upload_section::UPLOAD_SECTION_ID);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.route {
            Route::Home => html! {
                <div class="container">
                    { header::render_header() }

                    <main class="main-content">
                        { landing::render_hero(ctx.link()) }
                        { landing::render_features() }
                        { landing::render_steps() }
                        { upload_section::render_upload_section(self, ctx) }
                    </main>

                    <footer class="app-footer">
                        <p>{"© 2024 Parkinson's Analysis. All rights reserved."}</p>
                    </footer>
                </div>
            },
            Route::Results(_) => html! {
                <div class="container results-page">
                    { results::render_results(self, ctx) }
                </div>
            },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ParkinDetect starting...");
    yew::Renderer::<Model>::new().render();
}
