use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1 class="brand">{"ParkinDetect"}</h1>
            <nav class="app-nav">
                <a href="#about">{"About"}</a>
                <a href="#features">{"Features"}</a>
                <a href="#how-it-works">{"How it works"}</a>
            </nav>
        </header>
    }
}
