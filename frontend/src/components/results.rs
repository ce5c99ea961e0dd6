use super::super::{Model, Msg, ResolvedResult};
use shared::transport::results_url_with_payload;
use shared::AnalysisResult;
use yew::prelude::*;

const SUMMARY_CARDS: [(&str, &str, &str); 3] = [
    (
        "fa-solid fa-brain",
        "AI Analysis",
        "Our advanced algorithms have processed your data",
    ),
    (
        "fa-solid fa-chart-line",
        "Symptom Detection",
        "We've analyzed potential indicators in your submission",
    ),
    (
        "fa-solid fa-file-lines",
        "Detailed Report",
        "A comprehensive breakdown of our findings",
    ),
];

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let go_home = ctx.link().callback(|_| Msg::Navigate("/".to_string()));

    match &model.resolved {
        Ok(resolved) => render_report(resolved, go_home),
        Err(_) => html! {
            <div class="no-results">
                <p class="no-results-message">{"No result data available."}</p>
                <button class="analyze-btn" onclick={go_home}>{"Back to Home"}</button>
            </div>
        },
    }
}

/// `/results?data=...` for the shown result. `details` is left out; the Results View
/// derives the narrative again from the classification.
fn permalink(resolved: &ResolvedResult) -> Option<String> {
    let result = AnalysisResult {
        details: String::new(),
        ..resolved.result.clone()
    };
    results_url_with_payload(&result).ok()
}

fn render_report(resolved: &ResolvedResult, go_home: Callback<MouseEvent>) -> Html {
    let report = &resolved.report;
    let verdict = report.verdict;
    let permalink = permalink(resolved);

    html! {
        <>
            <button class="back-btn" onclick={go_home.clone()}>
                <i class="fa-solid fa-arrow-left"></i>{" Back to Home"}
            </button>
            <h1>{"Analysis Results"}</h1>

            <div class={classes!("results-container", verdict.css_class())}>
                <div class="result-header">
                    <i class={classes!(verdict.icon_class(), "verdict-icon")}></i>
                    <h2>{ verdict.to_string() }</h2>
                    <div class="confidence-meter">
                        <div class="meter-label">{"Confidence Level"}</div>
                        <div class="meter-value">{ &report.confidence_label }</div>
                        <progress class="meter" max="100" value={report.confidence.to_string()}></progress>
                    </div>
                </div>

                <p class="result-details">{ report.narrative }</p>

                <div class="detailed-results">
                    { for SUMMARY_CARDS.iter().map(|(icon, title, description)| html! {
                        <div class="result-item">
                            <i class={*icon}></i>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    })}
                </div>

                <div class="button-container">
                    <button class="analyze-btn" onclick={go_home}>{"Analyze Another Image"}</button>
                    {
                        if let Some(url) = permalink {
                            html! { <a class="permalink" href={url}>{"Permalink to this result"}</a> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::report::{HEALTHY_NARRATIVE, INDICATORS_NARRATIVE};
    use shared::transport::{decode_payload, query_param, DATA_PARAM};
    use shared::ResultReport;

    fn resolved(status: &str, confidence: f64, details: &str) -> ResolvedResult {
        let mut result = AnalysisResult::new(status, confidence);
        result.details = details.into();
        let report = ResultReport::from_result(&result);
        ResolvedResult { result, report }
    }

    #[test]
    fn test_permalink_leaves_out_narrative() {
        let shown = resolved("HEALTHY", 42.5, "a long server supplied explanation");
        let url = permalink(&shown).unwrap();

        assert!(url.starts_with("/results?data="));
        assert!(!url.contains("explanation"));
        assert!(!url.contains("machine"));
        assert!(url.len() < 200);

        let (_, search) = url.split_once('?').unwrap();
        let decoded = decode_payload(query_param(search, DATA_PARAM).unwrap()).unwrap();
        assert_eq!(decoded.classification(), Some("HEALTHY"));
        assert_eq!(decoded.confidence, 42.5);
        assert!(decoded.details.is_empty());
        assert_eq!(ResultReport::from_result(&decoded), shown.report);
        assert_eq!(shown.report.narrative, HEALTHY_NARRATIVE);
    }

    #[test]
    fn test_permalink_keeps_non_healthy_branch() {
        let shown = resolved("PARKINSON", 91.0, "");
        let url = permalink(&shown).unwrap();

        let (_, search) = url.split_once('?').unwrap();
        let decoded = decode_payload(query_param(search, DATA_PARAM).unwrap()).unwrap();
        assert_eq!(ResultReport::from_result(&decoded).narrative, INDICATORS_NARRATIVE);
    }
}
