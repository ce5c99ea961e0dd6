use super::super::{Model, Msg};
use yew::html::Scope;
use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "fa-solid fa-brain",
        "AI Analysis",
        "Advanced algorithms detect subtle movement patterns",
    ),
    (
        "fa-solid fa-chart-line",
        "Real-time Tracking",
        "Monitor symptoms and progression over time",
    ),
    (
        "fa-solid fa-file-lines",
        "Detailed Reports",
        "Generate comprehensive reports for healthcare providers",
    ),
];

const STEPS: [&str; 4] = [
    "Upload a spiral or wave drawing",
    "Our AI analyzes the drawing for Parkinson's indicators",
    "Receive a report of potential symptoms",
    "Share results with your healthcare provider for further evaluation",
];

pub fn render_hero(link: &Scope<Model>) -> Html {
    html! {
        <section id="about" class="hero">
            <h2>{"Revolutionize Parkinson's Detection"}</h2>
            <p class="subtitle">
                {"Save time and gain insights with ParkinDetect AI-powered symptom analysis system"}
            </p>
            <button class="analyze-btn" onclick={link.callback(|_| Msg::ScrollToUpload)}>
                {"Try it Now"}
            </button>
        </section>
    }
}

pub fn render_features() -> Html {
    html! {
        <section id="features" class="features">
            <h3>{"Key Features"}</h3>
            <div class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="feature-card">
                        <i class={*icon}></i>
                        <h4>{ *title }</h4>
                        <p>{ *description }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

pub fn render_steps() -> Html {
    html! {
        <section id="how-it-works" class="steps">
            <h3>{"How ParkinDetect Works"}</h3>
            <ol>
                { for STEPS.iter().map(|step| html! { <li>{ *step }</li> }) }
            </ol>
        </section>
    }
}
