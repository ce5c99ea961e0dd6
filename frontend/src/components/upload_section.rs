use super::super::Model;
use super::super::Msg;
use super::utils::{click_element, debounce, first_file, render_error_message};
use shared::upload::ACCEPTED_MIME_TYPES;
use shared::AnalysisMode;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{DragEvent, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub const UPLOAD_SECTION_ID: &str = "try-it-now";
const FILE_INPUT_ID: &str = "file-input";

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section id={UPLOAD_SECTION_ID} class="upload-section">
            <h3>{"Try It Now"}</h3>
            { render_mode_selector(model, ctx) }
            { render_file_input_area(model, ctx) }
            { render_error_message(model.input_error.as_deref()) }
            { render_error_message(model.form.failure()) }
            { render_analyze_button(model, ctx) }
        </section>
    }
}

fn render_mode_selector(model: &Model, ctx: &Context<Model>) -> Html {
    let handle_change = ctx.link().batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        AnalysisMode::from_str(&select.value()).ok().map(Msg::SetMode)
    });

    html! {
        <div class="processing-mode-selector">
            <label for="analysis-type">{"Choose Analysis Type:"}</label>
            <select id="analysis-type" onchange={handle_change}>
                { for AnalysisMode::iter().map(|mode| html! {
                    <option value={mode.to_string()} selected={mode == model.form.mode()}>
                        { mode.label() }
                    </option>
                })}
            </select>
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);
        input.set_value("");
        file.map(Msg::FileChosen)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept={ACCEPTED_MIME_TYPES.join(",")}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, || click_element(FILE_INPUT_ID))}
            >
                { render_selected_file(model) }
            </div>
        </>
    }
}

fn render_selected_file(model: &Model) -> Html {
    match (model.form.file(), model.preview_url.as_ref()) {
        (Some(file), Some(url)) => html! {
            <div class="upload-preview">
                <img id="actual-image-preview" src={url.to_string()} alt="Uploaded file preview" />
                <p class="file-name">{ &file.name }</p>
                <p class="file-types">{"Click or drag to change file"}</p>
            </div>
        },
        (Some(file), None) => html! {
            <div class="upload-preview">
                <p class="file-name">{ &file.name }</p>
                <p class="file-types">{"Click or drag to change file"}</p>
            </div>
        },
        _ => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag & drop your image here"}</p>
                <p class="file-types">{"or click to select (PNG, JPEG)"}</p>
            </div>
        },
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="button-container">
            <button
                class="analyze-btn"
                onclick={ctx.link().callback(|_| Msg::Analyze)}
                disabled={!model.form.can_submit()}
            >
                {
                    if model.form.is_in_flight() {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <>{"Analyze Image "}<i class="fa-solid fa-chevron-right"></i></> }
                    }
                }
            </button>
        </div>
    }
}
