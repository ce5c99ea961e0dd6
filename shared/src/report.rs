use derive_more::Display;

use crate::AnalysisResult;

pub const HEALTHY_SENTINEL: &str = "HEALTHY";

pub const HEALTHY_NARRATIVE: &str = "Our advanced machine learning models thoroughly analyzed your drawing for signs of tremors, pressure inconsistencies, and irregular movements commonly associated with Parkinson's Disease. Based on these metrics, the analysis indicates no significant indicators of the disease. This suggests that, according to our evaluation, you are likely not diagnosed with Parkinson's Disease. However, it's always advisable to consult with a healthcare professional for a comprehensive assessment.";

pub const INDICATORS_NARRATIVE: &str = "Our state-of-the-art algorithms have detected notable markers in your drawing, such as hand tremors, pressure variations, and irregularities in your movements, which are frequently linked to early stages of Parkinson's Disease. The findings strongly suggest that you may be showing signs consistent with the condition. While this analysis provides valuable insights, it is not a definitive diagnosis, and we encourage you to seek further evaluation from a medical professional.";

/// Exact, case-sensitive comparison against [`HEALTHY_SENTINEL`]. Anything else,
/// including a missing value, counts as non-healthy.
pub fn is_healthy(classification: Option<&str>) -> bool {
    classification == Some(HEALTHY_SENTINEL)
}

/// The narrative shown to the user. Whatever the service put in `details` is ignored.
pub fn derive_narrative(is_healthy: bool) -> &'static str {
    if is_healthy {
        HEALTHY_NARRATIVE
    } else {
        INDICATORS_NARRATIVE
    }
}

/// Clamps to `[0, 100]`. Non-finite values and `-0.0` become `0.0`.
pub fn clamp_confidence(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let clamped = value.clamp(0.0, 100.0);
    if clamped == 0.0 { 0.0 } else { clamped }
}

/// Two decimals with ties rounded half-up, matching `Number.prototype.toFixed(2)`.
pub fn format_confidence(value: f64) -> String {
    let rounded = (clamp_confidence(value) * 100.0).round() / 100.0;
    format!("{:.2}%", rounded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display(fmt = "No Indicators Detected")]
    Healthy,
    #[display(fmt = "Parkinson's Indicators Detected")]
    IndicatorsDetected,
}

impl Verdict {
    pub fn from_result(result: &AnalysisResult) -> Self {
        if is_healthy(result.classification()) {
            Verdict::Healthy
        } else {
            Verdict::IndicatorsDetected
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Verdict::Healthy)
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Verdict::Healthy => "fa-solid fa-circle-check",
            Verdict::IndicatorsDetected => "fa-solid fa-triangle-exclamation",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Healthy => "healthy",
            Verdict::IndicatorsDetected => "indicators-detected",
        }
    }
}

/// Display model for the Results View.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub verdict: Verdict,
    /// Clamped to `[0, 100]`; drives both the label and the progress bar.
    pub confidence: f64,
    pub confidence_label: String,
    pub narrative: &'static str,
}

impl ResultReport {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let verdict = Verdict::from_result(result);
        let confidence = clamp_confidence(result.confidence);
        Self {
            verdict,
            confidence,
            confidence_label: format_confidence(confidence),
            narrative: derive_narrative(verdict.is_healthy()),
        }
    }

    /// Copy of `result` with `details` replaced by the derived narrative.
    pub fn apply_to(&self, result: &AnalysisResult) -> AnalysisResult {
        AnalysisResult {
            details: self.narrative.to_string(),
            ..result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_scenario() {
        let result = AnalysisResult::new("HEALTHY", 42.5);
        let report = ResultReport::from_result(&result);
        assert_eq!(report.confidence_label, "42.50%");
        assert_eq!(report.narrative, HEALTHY_NARRATIVE);
        assert_eq!(report.verdict, Verdict::Healthy);
        assert_eq!(report.verdict.icon_class(), "fa-solid fa-circle-check");
    }

    #[test]
    fn test_parkinson_scenario() {
        let result = AnalysisResult::new("PARKINSON", 91.0);
        let report = ResultReport::from_result(&result);
        assert_eq!(report.confidence_label, "91.00%");
        assert_eq!(report.narrative, INDICATORS_NARRATIVE);
        assert_eq!(report.verdict, Verdict::IndicatorsDetected);
    }

    #[test]
    fn test_server_details_are_replaced() {
        let mut result = AnalysisResult::new("HEALTHY", 10.0);
        result.details = "server supplied text".into();
        let report = ResultReport::from_result(&result);
        assert_eq!(report.narrative, HEALTHY_NARRATIVE);
        assert_eq!(report.apply_to(&result).details, HEALTHY_NARRATIVE);

        result.status = Some("PARKINSON".into());
        let report = ResultReport::from_result(&result);
        assert_eq!(report.apply_to(&result).details, INDICATORS_NARRATIVE);
    }

    #[test]
    fn test_sentinel_is_exact_match() {
        assert!(is_healthy(Some("HEALTHY")));
        assert!(!is_healthy(Some("healthy")));
        assert!(!is_healthy(Some(" HEALTHY")));
        assert!(!is_healthy(Some("parkinsons")));
        assert!(!is_healthy(Some("")));
        assert!(!is_healthy(None));
    }

    #[test]
    fn test_confidence_two_decimals_in_range() {
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(100.0), "100.00%");
        assert_eq!(format_confidence(33.333), "33.33%");
        assert_eq!(format_confidence(7.1), "7.10%");
        assert_eq!(format_confidence(42.5), "42.50%");
        assert_eq!(format_confidence(91.0), "91.00%");
        assert_eq!(format_confidence(1.005), "1.00%");
        assert_eq!(format_confidence(66.666), "66.67%");
    }

    #[test]
    fn test_confidence_ties_round_half_up() {
        assert_eq!(format_confidence(0.125), "0.13%");
        assert_eq!(format_confidence(0.625), "0.63%");
        assert_eq!(format_confidence(12.375), "12.38%");
        assert_eq!(format_confidence(42.125), "42.13%");
        assert_eq!(format_confidence(33.335), "33.34%");
        assert_eq!(format_confidence(99.995), "100.00%");
    }

    #[test]
    fn test_negative_zero_confidence() {
        assert_eq!(format_confidence(-0.0), "0.00%");
        assert!(clamp_confidence(-0.0).is_sign_positive());

        let result: AnalysisResult =
            serde_json::from_str(r#"{"status":"HEALTHY","confidence":-0.0}"#).unwrap();
        let report = ResultReport::from_result(&result);
        assert_eq!(report.confidence_label, "0.00%");
        assert!(report.confidence.is_sign_positive());
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(clamp_confidence(-5.0), 0.0);
        assert_eq!(clamp_confidence(250.0), 100.0);
        assert_eq!(clamp_confidence(f64::NAN), 0.0);
        let report = ResultReport::from_result(&AnalysisResult::new("PARKINSON", 140.0));
        assert_eq!(report.confidence, 100.0);
        assert_eq!(report.confidence_label, "100.00%");
    }

    #[test]
    fn test_verdict_headlines() {
        assert_eq!(Verdict::Healthy.to_string(), "No Indicators Detected");
        assert_eq!(
            Verdict::IndicatorsDetected.to_string(),
            "Parkinson's Indicators Detected"
        );
    }
}
