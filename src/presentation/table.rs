//! Prioritization table with column-wise heat-map shading

use crate::presentation::types::{HeatCell, PriorityTable, TableRow};
use crate::scorer::Ranking;
use crate::utils::{min_max_normalize, ColorRamp};

pub const TOTAL_SCORE_COLUMN: &str = "Total Score";

pub fn build_priority_table(ranking: &Ranking) -> PriorityTable {
    let mut columns = ranking.schema.clone();
    columns.push(TOTAL_SCORE_COLUMN.to_string());

    // Column-major values: attributes then total score
    let column_values: Vec<Vec<i64>> = (0..columns.len())
        .map(|col| {
            ranking
                .iter()
                .map(|park| {
                    if col < ranking.schema.len() {
                        park.record.value(col)
                    } else {
                        park.total_score
                    }
                })
                .collect()
        })
        .collect();

    let intensities: Vec<Vec<f64>> = column_values.iter().map(|c| min_max_normalize(c)).collect();

    let rows = ranking
        .iter()
        .enumerate()
        .map(|(row, park)| TableRow {
            park: park.name().to_string(),
            cells: (0..columns.len())
                .map(|col| {
                    let intensity = intensities[col][row];
                    let color = ColorRamp::YlOrRd.at(intensity);
                    HeatCell {
                        value: column_values[col][row],
                        intensity,
                        background: color.to_hex(),
                        text_color: color.text_color().to_string(),
                    }
                })
                .collect(),
        })
        .collect();

    PriorityTable { columns, rows }
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
    fn test_columns_and_row_order() {
        let table = build_priority_table(&cary_ranking());
        assert_eq!(table.columns.len(), 6);
        assert_eq!(table.columns[5], TOTAL_SCORE_COLUMN);
        assert_eq!(table.rows[0].park, "Carpenter");
        assert_eq!(table.rows[0].cells[5].value, 25);
    }

    #[test]
    fn test_heat_intensity_is_per_column() {
        let table = build_priority_table(&cary_ranking());

        // Water Distribution: Carpenter 2 of range 0..5
        assert_relative_eq!(table.rows[0].cells[1].intensity, 0.4, epsilon = 1e-9);
        // Total Score: Carpenter is the column maximum
        assert_relative_eq!(table.rows[0].cells[5].intensity, 1.0, epsilon = 1e-9);
        assert_eq!(table.rows[0].cells[5].background, "#800026");
        // Thomas Brooks has the lowest total
        assert_relative_eq!(table.rows[4].cells[5].intensity, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_row_has_zero_intensity() {
        let ranking = Selection::of(["Dunham Park"]).apply(&cary_ranking());
        let table = build_priority_table(&ranking);
        assert!(table.rows[0].cells.iter().all(|c| c.intensity == 0.0));
    }

    #[test]
    fn test_empty_selection() {
        let table = build_priority_table(&Selection::none().apply(&cary_ranking()));
        assert!(table.rows.is_empty());
        assert_eq!(table.columns.len(), 6);
    }
}
