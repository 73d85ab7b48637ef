//! Multi-select park filter

use crate::scorer::Ranking;
use rustc_hash::FxHashSet;

/// Which parks a view shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every park (the default filter)
    #[default]
    All,
    /// Only the named parks; unknown names match nothing
    Only(FxHashSet<String>),
}

impl Selection {
    pub fn all() -> Self {
        Selection::All
    }

    pub fn none() -> Self {
        Selection::Only(FxHashSet::default())
    }

    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Only(names.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated `parks` parameter
    ///
    /// Absent → all parks; present but blank → empty selection.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => Selection::All,
            Some(list) => Self::of(
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty()),
            ),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(names) => names.contains(name),
        }
    }

    /// Keep only selected parks; order and scores are untouched
    pub fn apply(&self, ranking: &Ranking) -> Ranking {
        Ranking {
            variant: ranking.variant,
            schema: ranking.schema.clone(),
            parks: ranking
                .iter()
                .filter(|park| self.contains(park.name()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, DatasetVariant};
    use crate::scorer::ParkScorer;

    fn cary_ranking() -> Ranking {
        ParkScorer::for_variant(DatasetVariant::A).rank(&Dataset::cary())
    }

    #[test]
    fn test_all_keeps_everything() {
        let ranking = cary_ranking();
        assert_eq!(Selection::all().apply(&ranking), ranking);
    }

    #[test]
    fn test_subset_preserves_order_and_scores() {
        let ranking = cary_ranking();
        let filtered = Selection::of(["Thomas Brooks", "Carpenter", "Dunham Park"]).apply(&ranking);

        let names: Vec<&str> = filtered.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Carpenter", "Dunham Park", "Thomas Brooks"]);

        for park in filtered.iter() {
            assert_eq!(Some(park), ranking.get(park.name()));
        }
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let filtered = Selection::of(["Nowhere", "Carpenter"]).apply(&cary_ranking());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_from_param() {
        assert_eq!(Selection::from_param(None), Selection::All);
        assert_eq!(Selection::from_param(Some("")), Selection::none());
        assert_eq!(Selection::from_param(Some(" , ")), Selection::none());
        assert_eq!(
            Selection::from_param(Some("Carpenter, Dunham Park")),
            Selection::of(["Carpenter", "Dunham Park"])
        );
    }

    #[test]
    fn test_empty_selection() {
        assert!(Selection::none().apply(&cary_ranking()).is_empty());
    }
}
