//! Filter/list view over the catalog's places
//!
//! Filters are pure and keep catalog order. An empty result is a normal
//! "no matches" state.

pub mod recommendations;

use std::fmt;
use std::str::FromStr;

use crate::TrailsError;
use crate::models::{CrowdLevel, Place, PlaceCategory};

pub use recommendations::{Recommendation, recommend_for_hour, recommend_now};

/// A filter value that is either "all" or a single enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

pub type CategoryFilter = Filter<PlaceCategory>;
pub type CrowdFilter = Filter<CrowdLevel>;

impl<T: PartialEq> Filter<T> {
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr<Err = TrailsError>,
{
    type Err = TrailsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

/// Places matching both filters, in catalog order.
pub fn filter_places<'a>(
    places: impl IntoIterator<Item = &'a Place>,
    category: CategoryFilter,
    crowd: CrowdFilter,
) -> Vec<&'a Place> {
    places
        .into_iter()
        .filter(|place| category.matches(&place.category) && crowd.matches(&place.crowd_level))
        .collect()
}

pub fn filter_by_category<'a>(
    places: impl IntoIterator<Item = &'a Place>,
    category: CategoryFilter,
) -> Vec<&'a Place> {
    filter_places(places, category, Filter::All)
}

pub fn filter_by_crowd<'a>(
    places: impl IntoIterator<Item = &'a Place>,
    crowd: CrowdFilter,
) -> Vec<&'a Place> {
    filter_places(places, Filter::All, crowd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rstest::rstest;

    fn ids(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.id.clone()).collect()
    }

    fn all_category_filters() -> Vec<CategoryFilter> {
        std::iter::once(Filter::All)
            .chain(PlaceCategory::ALL.iter().copied().map(Filter::Only))
            .collect()
    }

    fn all_crowd_filters() -> Vec<CrowdFilter> {
        std::iter::once(Filter::All)
            .chain(CrowdLevel::ALL.iter().copied().map(Filter::Only))
            .collect()
    }

    #[test]
    fn test_nature_low_scenario() {
        let catalog = Catalog::builtin().unwrap();
        let result = filter_places(
            &catalog.places,
            Filter::Only(PlaceCategory::Nature),
            Filter::Only(CrowdLevel::Low),
        );
        assert_eq!(
            ids(&result),
            vec![
                "kukkarahalli-lake",
                "lingambudhi-lake",
                "ranganathittu-outskirts-walking-paths",
                "karanji-lake",
            ]
        );
    }

    #[test]
    fn test_all_all_is_identity() {
        let catalog = Catalog::builtin().unwrap();
        let result = filter_places(&catalog.places, Filter::All, Filter::All);
        assert_eq!(result.len(), catalog.places.len());
        assert!(result.iter().zip(&catalog.places).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_filters_commute_for_every_pair() {
        let catalog = Catalog::builtin().unwrap();
        for category in all_category_filters() {
            for crowd in all_crowd_filters() {
                let category_first =
                    filter_by_crowd(filter_by_category(&catalog.places, category), crowd);
                let crowd_first =
                    filter_by_category(filter_by_crowd(&catalog.places, crowd), category);
                let combined = filter_places(&catalog.places, category, crowd);
                assert_eq!(ids(&category_first), ids(&crowd_first), "{category} / {crowd}");
                assert_eq!(ids(&category_first), ids(&combined), "{category} / {crowd}");
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let once = filter_by_category(&catalog.places, Filter::Only(PlaceCategory::Heritage));
        let twice = filter_by_category(once.iter().copied(), Filter::Only(PlaceCategory::Heritage));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let result = filter_places(
            &catalog.places,
            Filter::Only(PlaceCategory::Food),
            Filter::Only(CrowdLevel::High),
        );
        assert!(result.is_empty());
    }

    #[rstest]
    #[case("all", Filter::All)]
    #[case("", Filter::All)]
    #[case("ALL", Filter::All)]
    #[case("nature", Filter::Only(PlaceCategory::Nature))]
    #[case(" art ", Filter::Only(PlaceCategory::Art))]
    fn test_parse_category_filter(#[case] raw: &str, #[case] expected: CategoryFilter) {
        assert_eq!(raw.parse::<CategoryFilter>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!("beach".parse::<CategoryFilter>().is_err());
        assert!("packed".parse::<CrowdFilter>().is_err());
        assert_eq!("medium".parse::<CrowdFilter>().unwrap(), Filter::Only(CrowdLevel::Medium));
    }
}
