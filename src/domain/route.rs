use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::domain::dataset::{Alternative, Dataset};

/// The four pages of the dashboard.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Route {
    #[default]
    Home,
    Solar,
    Wind,
    #[strum(to_string = "DMFC")]
    Dmfc,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route {0:?}, expected one of /, /solar, /wind, /dmfc")]
    UnknownPath(String),
}

impl Route {
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let normalized = path.trim().trim_end_matches('/').to_ascii_lowercase();
        match normalized.as_str() {
            "" => Ok(Route::Home),
            "/solar" => Ok(Route::Solar),
            // `/eolico` is the historical path of the wind page.
            "/wind" | "/eolico" => Ok(Route::Wind),
            "/dmfc" => Ok(Route::Dmfc),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Solar => "/solar",
            Route::Wind => "/wind",
            Route::Dmfc => "/dmfc",
        }
    }

    /// Id of the alternative a technology page shows.
    pub fn alternative_id(self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::Solar => Some("solar"),
            Route::Wind => Some("wind"),
            Route::Dmfc => Some("dmfc"),
        }
    }

    /// Resolves the page's alternative. `None` on the home page and when
    /// the dataset has no alternative with the route's id.
    pub fn resolve(self, dataset: &Dataset) -> Option<&Alternative> {
        self.alternative_id().and_then(|id| dataset.alternative(id))
    }

    pub fn technologies() -> [Route; 3] {
        [Route::Solar, Route::Wind, Route::Dmfc]
    }

    pub fn all() -> Vec<Route> {
        Route::iter().collect()
    }

    pub fn index(self) -> usize {
        Route::iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Route::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Route::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::dataset::fixtures::dataset;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("", Route::Home)]
    #[case("/solar", Route::Solar)]
    #[case("/solar/", Route::Solar)]
    #[case("/Wind", Route::Wind)]
    #[case("/eolico", Route::Wind)]
    #[case("/dmfc", Route::Dmfc)]
    fn test_from_path(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::from_path(path), Ok(expected));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(
            Route::from_path("/hydro"),
            Err(RouteError::UnknownPath("/hydro".to_string()))
        );
    }

    #[test]
    fn test_path_roundtrip() {
        for route in Route::all() {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[rstest]
    fn test_solar_resolves_to_solar_alternative(dataset: Dataset) {
        let alt = Route::Solar.resolve(&dataset).map(|alt| alt.id.as_str());
        assert_eq!(alt, Some("solar"));
    }

    #[rstest]
    fn test_resolve_absent_id(mut dataset: Dataset) {
        dataset.alternatives.retain(|alt| alt.id != "wind");
        assert_eq!(Route::Wind.resolve(&dataset), None);
        assert_eq!(Route::Home.resolve(&dataset), None);
    }

    #[test]
    fn test_next_prev_cycle() {
        assert_eq!(Route::Home.next(), Route::Solar);
        assert_eq!(Route::Dmfc.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Dmfc);
        assert_eq!(Route::Wind.prev(), Route::Solar);
    }

    #[test]
    fn test_display() {
        let titles: Vec<String> = Route::all().iter().map(ToString::to_string).collect();
        assert_eq!(titles, vec!["Home", "Solar", "Wind", "DMFC"]);
    }
}
