//! Radar comparison: one closed polygon per park over the schema axes

use crate::presentation::types::{RadarChart, RadarPoint, RadarTrace};
use crate::scorer::Ranking;
use crate::utils::shared_max_normalize;

pub fn build_radar_chart(ranking: &Ranking) -> RadarChart {
    let radial_max = ranking
        .iter()
        .flat_map(|p| p.record.values.iter().copied())
        .max()
        .unwrap_or(0);

    let traces = ranking
        .iter()
        .map(|park| {
            let mut points: Vec<RadarPoint> = ranking
                .schema
                .iter()
                .zip(&park.record.values)
                .map(|(axis, &value)| RadarPoint {
                    axis: axis.clone(),
                    value,
                    radius: shared_max_normalize(value, radial_max),
                })
                .collect();

            // Close the polygon
            if let Some(first) = points.first().cloned() {
                points.push(first);
            }

            RadarTrace {
                park: park.name().to_string(),
                points,
            }
        })
        .collect();

    RadarChart {
        axes: ranking.schema.clone(),
        radial_max,
        traces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, DatasetVariant};
    use crate::presentation::Selection;
    use crate::scorer::ParkScorer;
    use approx::assert_relative_eq;

    fn cary_ranking() -> Ranking {
        ParkScorer::for_variant(DatasetVariant::A).rank(&Dataset::cary())
    }

    #[test]
    fn test_traces_are_closed() {
        let chart = build_radar_chart(&cary_ranking());
        assert_eq!(chart.traces.len(), 5);
        for trace in &chart.traces {
            assert_eq!(trace.points.len(), chart.axes.len() + 1);
            assert_eq!(trace.points.first().unwrap().axis, trace.points.last().unwrap().axis);
        }
    }

    #[test]
    fn test_shared_radial_axis() {
        let ranking = Selection::of(["Hemlock Bluffs", "Dunham Park"]).apply(&cary_ranking());
        let chart = build_radar_chart(&ranking);

        // Largest value across both parks is 8
        assert_eq!(chart.radial_max, 8);
        let hemlock = chart.traces.iter().find(|t| t.park == "Hemlock Bluffs").unwrap();
        assert_eq!(hemlock.points[0].value, 8);
        assert_relative_eq!(hemlock.points[0].radius, 1.0, epsilon = 1e-9);
        assert_relative_eq!(hemlock.points[2].radius, 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_selection() {
        let chart = build_radar_chart(&Selection::none().apply(&cary_ranking()));
        assert!(chart.traces.is_empty());
        assert_eq!(chart.radial_max, 0);
        assert_eq!(chart.axes.len(), 5);
    }
}
