use crate::data::Dataset;
use crate::error::Result;
use crate::presentation::types::*;
use crate::presentation::{
    build_park_detail, build_priority_table, build_quadrant_chart, build_radar_chart,
    build_ranking_chart, Selection,
};
use crate::scorer::ParkScorer;

/// Main dashboard generator
pub struct DashboardGenerator;

impl DashboardGenerator {
    /// Build every projection for one view
    ///
    /// Takes:
    /// - dataset: compiled-in (or validated) park table
    /// - selection: multi-select filter applied to the charts and table
    /// - detail: park for the detail view, chosen from the whole dataset;
    ///   `None` picks the top-ranked park
    ///
    /// Returns: Dashboard, or `UnknownPark` when `detail` names no park
    pub fn generate(
        dataset: &Dataset,
        selection: &Selection,
        detail: Option<&str>,
    ) -> Result<Dashboard> {
        let scorer = ParkScorer::for_dataset(dataset);
        let ranking = scorer.rank(dataset);
        let filtered = selection.apply(&ranking);

        let scatter = if scorer.scheme().has_quadrant_axes() {
            Some(build_quadrant_chart(&filtered, scorer.scheme())?)
        } else {
            None
        };

        let detail = match detail {
            Some(name) => Some(build_park_detail(&ranking, name)?),
            None => match ranking.top() {
                Some(top) => Some(build_park_detail(&ranking, top.name())?),
                None => None,
            },
        };

        tracing::debug!(
            variant = %dataset.variant,
            selected = filtered.len(),
            detail = detail.as_ref().map(|d| d.park.as_str()).unwrap_or(""),
            "generated dashboard"
        );

        Ok(Dashboard {
            variant: dataset.variant,
            title: dataset.variant.title().to_string(),
            selected: filtered.iter().map(|p| p.name().to_string()).collect(),
            scatter,
            table: build_priority_table(&filtered),
            bar: build_ranking_chart(&filtered),
            radar: build_radar_chart(&filtered),
            ranking: filtered,
            detail,
        })
    }
}
