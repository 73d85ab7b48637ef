//! Feasibility/urgency quadrant scatter
//!
//! Divider lines sit at the arithmetic mean of each axis over the selected
//! parks. Line extents and label anchors are fixed offsets from the data.

use crate::data::cary;
use crate::error::{DashboardError, Result};
use crate::presentation::types::*;
use crate::scorer::{Ranking, ScoredPark, ScoringScheme};
use crate::utils::mean;

/// Vertical divider spans urgency min/max widened by this much on both ends
const URGENCY_PAD: f64 = 2.0;
/// Horizontal divider padding on the feasibility axis (left, right)
const FEASIBILITY_PAD_LEFT: f64 = 6.0;
const FEASIBILITY_PAD_RIGHT: f64 = 2.0;

pub fn build_quadrant_chart(ranking: &Ranking, scheme: &ScoringScheme) -> Result<QuadrantChart> {
    if !scheme.has_quadrant_axes() {
        return Err(DashboardError::QuadrantUnavailable(ranking.variant.slug()));
    }

    // (park, feasibility, urgency); every park has both when the scheme does
    let coords: Vec<(&ScoredPark, i64, i64)> = ranking
        .iter()
        .filter_map(|p| Some((p, p.feasibility?, p.urgency?)))
        .collect();

    let feasibility: Vec<i64> = coords.iter().map(|c| c.1).collect();
    let urgency: Vec<i64> = coords.iter().map(|c| c.2).collect();

    let mut chart = QuadrantChart {
        title: "Invasive Species Action Priority Matrix".to_string(),
        x_title: "Feasibility (Landscaping + Partnerships - Private Property)".to_string(),
        y_title: "Urgency (Threat Level + Water Distribution)".to_string(),
        feasibility_mean: mean(&feasibility),
        urgency_mean: mean(&urgency),
        points: Vec::with_capacity(coords.len()),
        dividers: Vec::new(),
        labels: Vec::new(),
    };

    let (Some(x_mean), Some(y_mean)) = (chart.feasibility_mean, chart.urgency_mean) else {
        return Ok(chart);
    };

    for (park, f, u) in &coords {
        chart.points.push(ScatterPoint {
            park: park.name().to_string(),
            feasibility: *f,
            urgency: *u,
            size: park.record.value(cary::THREAT_LEVEL),
            quadrant: Quadrant::classify(*f as f64, *u as f64, x_mean, y_mean),
            hover: ranking
                .schema
                .iter()
                .zip(&park.record.values)
                .map(|(name, &value)| AttributeValue {
                    name: name.clone(),
                    value,
                })
                .collect(),
        });
    }

    // Non-empty here, so min/max exist
    let (f_min, f_max) = min_max(&feasibility);
    let (u_min, u_max) = min_max(&urgency);

    chart.dividers.push(DividerLine {
        orientation: Orientation::Vertical,
        at: x_mean,
        from: u_min as f64 - URGENCY_PAD,
        to: u_max as f64 + URGENCY_PAD,
    });
    chart.dividers.push(DividerLine {
        orientation: Orientation::Horizontal,
        at: y_mean,
        from: f_min as f64 - FEASIBILITY_PAD_LEFT,
        to: f_max as f64 + FEASIBILITY_PAD_RIGHT,
    });

    chart.labels = Quadrant::ALL
        .iter()
        .map(|&quadrant| {
            let (dx, dy) = quadrant.offset();
            QuadrantLabel {
                quadrant,
                x: x_mean + dx,
                y: y_mean + dy,
                text: format!("{}\n({})", quadrant.label(), quadrant.description()),
                background: quadrant.background().to_string(),
            }
        })
        .collect();

    tracing::debug!(
        points = chart.points.len(),
        feasibility_mean = x_mean,
        urgency_mean = y_mean,
        "built quadrant chart"
    );

    Ok(chart)
}

fn min_max(values: &[i64]) -> (i64, i64) {
    values.iter().fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
