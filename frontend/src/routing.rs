use shared::transport::{self, DATA_PARAM, ID_PARAM, RESULTS_PATH};
use shared::{AnalysisResult, DecodeFailure, OneShotStore, Uuid};
use wasm_bindgen::JsValue;

/// Where the Results View should look for its result.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultSource {
    Handle(Uuid),
    Encoded(String),
    Malformed(String),
    Missing,
}

impl ResultSource {
    fn from_search(search: &str) -> Self {
        if let Some(id) = transport::query_param(search, ID_PARAM) {
            match Uuid::parse_str(id) {
                Ok(id) => ResultSource::Handle(id),
                Err(_) => ResultSource::Malformed(id.to_string()),
            }
        } else if let Some(data) = transport::query_param(search, DATA_PARAM) {
            ResultSource::Encoded(data.to_string())
        } else {
            ResultSource::Missing
        }
    }

    /// Handles are consumed from `store`; resolving the same handle twice fails.
    pub fn resolve(&self, store: &mut OneShotStore) -> Result<AnalysisResult, DecodeFailure> {
        match self {
            ResultSource::Handle(id) => store.take_or_fail(id),
            ResultSource::Encoded(data) => transport::decode_payload(data),
            ResultSource::Malformed(raw) => Err(DecodeFailure::InvalidEncoding(raw.clone())),
            ResultSource::Missing => Err(DecodeFailure::Missing),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    Results(ResultSource),
}

impl Route {
    pub fn parse(path: &str, search: &str) -> Self {
        if path.trim_end_matches('/') == RESULTS_PATH {
            Route::Results(ResultSource::from_search(search))
        } else {
            Route::Home
        }
    }

    pub fn parse_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, search)) => Self::parse(path, search),
            None => Self::parse(url, ""),
        }
    }

    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Route::Home;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self::parse(&path, &search)
    }
}

pub fn push_url(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::transport::{results_url_with_handle, results_url_with_payload};

    #[test]
    fn test_home_routes() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", "?data=x"), Route::Home);
        assert_eq!(Route::parse("/about", ""), Route::Home);
    }

    #[test]
    fn test_results_without_parameter_is_missing() {
        let route = Route::parse("/results", "");
        assert_eq!(route, Route::Results(ResultSource::Missing));
        assert_eq!(Route::parse("/results/", "?other=1"), route);

        let mut store = OneShotStore::default();
        assert_eq!(
            ResultSource::Missing.resolve(&mut store),
            Err(DecodeFailure::Missing)
        );
    }

    #[test]
    fn test_handle_route_consumes_store_entry() {
        let mut store = OneShotStore::default();
        let id = store.put(AnalysisResult::new("HEALTHY", 42.5));
        let route = Route::parse_url(&results_url_with_handle(&id));
        let Route::Results(source) = route else {
            panic!("expected results route");
        };

        let result = source.resolve(&mut store).unwrap();
        assert_eq!(result.classification(), Some("HEALTHY"));
        assert_eq!(result.confidence, 42.5);
        assert_eq!(source.resolve(&mut store), Err(DecodeFailure::UnknownHandle));
    }

    #[test]
    fn test_encoded_route_decodes_payload() {
        let url = results_url_with_payload(&AnalysisResult::new("PARKINSON", 91.0)).unwrap();
        let Route::Results(source) = Route::parse_url(&url) else {
            panic!("expected results route");
        };
        let result = source.resolve(&mut OneShotStore::default()).unwrap();
        assert_eq!(result.classification(), Some("PARKINSON"));
        assert_eq!(result.confidence, 91.0);
    }

    #[test]
    fn test_bad_parameters_do_not_panic() {
        let mut store = OneShotStore::default();
        let Route::Results(source) = Route::parse("/results", "?id=not-a-uuid") else {
            panic!("expected results route");
        };
        assert!(matches!(
            source.resolve(&mut store),
            Err(DecodeFailure::InvalidEncoding(_))
        ));

        let Route::Results(source) = Route::parse("/results", "?data=%7Bbroken") else {
            panic!("expected results route");
        };
        assert!(matches!(
            source.resolve(&mut store),
            Err(DecodeFailure::InvalidJson(_))
        ));
    }
}
