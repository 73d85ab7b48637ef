//! Single-park detail view

use crate::error::{DashboardError, Result};
use crate::presentation::types::{AttributeValue, ParkDetail};
use crate::scorer::Ranking;

/// Detail for `name`, looked up in the full (unfiltered) ranking
pub fn build_park_detail(ranking: &Ranking, name: &str) -> Result<ParkDetail> {
    let (index, park) = ranking
        .iter()
        .enumerate()
        .find(|(_, p)| p.name() == name)
        .ok_or_else(|| DashboardError::UnknownPark(name.to_string()))?;

    Ok(ParkDetail {
        park: park.name().to_string(),
        rank: index + 1,
        total_score: park.total_score,
        feasibility: park.feasibility,
        urgency: park.urgency,
        attributes: ranking
            .schema
            .iter()
            .zip(&park.record.values)
            .map(|(attribute, &value)| AttributeValue {
                name: attribute.clone(),
                value,
            })
            .collect(),
        annotations: park.record.annotations.clone(),
    })
}
