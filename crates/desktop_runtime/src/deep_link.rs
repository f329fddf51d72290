//! `?open=` query-string deep links applied once at boot.

use crate::model::AppType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLink {
    /// Apps to open, in query order, without duplicates.
    pub open: Vec<AppType>,
    /// Ids that did not name a known application.
    pub unknown: Vec<String>,
}

/// Parses a location search string such as `?open=projects,contact`.
///
/// Repeated `open` parameters are concatenated. Other parameters are ignored.
pub fn parse_open_query(search: &str) -> DeepLink {
    let mut link = DeepLink::default();
    let query = search.strip_prefix('?').unwrap_or(search);

    for pair in query.split('&') {
        let Some(("open", value)) = pair.split_once('=') else {
            continue;
        };
        for raw in value.split(|c| c == ',' || c == '+').map(str::trim) {
            if raw.is_empty() {
                continue;
            }
            match raw.parse::<AppType>() {
                Ok(app_type) if !link.open.contains(&app_type) => link.open.push(app_type),
                Ok(_) => {}
                Err(err) => link.unknown.push(err.0),
            }
        }
    }
    link
}

/// Returns `window.location.search`, or an empty string off the browser.
pub fn current_search() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn opens_listed_apps_in_order_and_reports_unknown_ids() {
        assert_eq!(
            parse_open_query("?theme=dark&open=projects,calculator,contact,projects"),
            DeepLink {
                open: vec![AppType::Projects, AppType::Contact],
                unknown: vec!["calculator".to_string()],
            }
        );
    }

    #[test]
    fn empty_or_unrelated_queries_open_nothing() {
        assert_eq!(parse_open_query(""), DeepLink::default());
        assert_eq!(parse_open_query("?ref=home"), DeepLink::default());
        assert_eq!(parse_open_query("?open="), DeepLink::default());
    }

    #[test]
    fn repeated_parameters_accumulate() {
        assert_eq!(
            parse_open_query("open=terminal&open=games").open,
            vec![AppType::Terminal, AppType::Games]
        );
    }
}
