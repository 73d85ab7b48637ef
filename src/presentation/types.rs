//! Serializable projections of a ranked, filtered park table

use serde::Serialize;
use crate::data::{Annotation, DatasetVariant};
use crate::scorer::Ranking;

/// Every projection of one dashboard view
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub variant: DatasetVariant,
    pub title: String,
    /// Selected park names, in rank order
    pub selected: Vec<String>,
    /// Filtered ranking
    pub ranking: Ranking,
    /// `None` when the dataset has no feasibility/urgency axes
    pub scatter: Option<QuadrantChart>,
    pub table: PriorityTable,
    pub bar: RankingChart,
    pub radar: RadarChart,
    /// `None` only when the dataset has no parks
    pub detail: Option<ParkDetail>,
}

/// Named attribute value (hover data, detail bullets)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    pub name: String,
    pub value: i64,
}

// ============================================================================
// Quadrant scatter
// ============================================================================

/// Feasibility/urgency action matrix
#[derive(Debug, Clone, Serialize)]
pub struct QuadrantChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Arithmetic mean of feasibility over the selection
    pub feasibility_mean: Option<f64>,
    /// Arithmetic mean of urgency over the selection
    pub urgency_mean: Option<f64>,
    pub points: Vec<ScatterPoint>,
    pub dividers: Vec<DividerLine>,
    pub labels: Vec<QuadrantLabel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub park: String,
    pub feasibility: i64,
    pub urgency: i64,
    /// Marker size (Threat Level)
    pub size: i64,
    pub quadrant: Quadrant,
    pub hover: Vec<AttributeValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Dashed divider: `at` is the x (vertical) or y (horizontal) position,
/// `from`/`to` the extent along the other axis
#[derive(Debug, Clone, Serialize)]
pub struct DividerLine {
    pub orientation: Orientation,
    pub at: f64,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantLabel {
    pub quadrant: Quadrant,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub background: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    QuickWins,
    DifficultButUrgent,
    LowerPriority,
    EasyButNotUrgent,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWins,
        Quadrant::DifficultButUrgent,
        Quadrant::LowerPriority,
        Quadrant::EasyButNotUrgent,
    ];

    /// Classify against the dividers; values on a divider count as high
    pub fn classify(feasibility: f64, urgency: f64, feasibility_mean: f64, urgency_mean: f64) -> Self {
        match (feasibility >= feasibility_mean, urgency >= urgency_mean) {
            (true, true) => Quadrant::QuickWins,
            (false, true) => Quadrant::DifficultButUrgent,
            (false, false) => Quadrant::LowerPriority,
            (true, false) => Quadrant::EasyButNotUrgent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "Quick Wins",
            Quadrant::DifficultButUrgent => "Difficult but Urgent",
            Quadrant::LowerPriority => "Lower Priority",
            Quadrant::EasyButNotUrgent => "Easy but Not Urgent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "High Feasibility, High Urgency",
            Quadrant::DifficultButUrgent => "Low Feasibility, High Urgency",
            Quadrant::LowerPriority => "Low Feasibility, Low Urgency",
            Quadrant::EasyButNotUrgent => "High Feasibility, Low Urgency",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "lightgreen",
            Quadrant::DifficultButUrgent => "khaki",
            Quadrant::LowerPriority => "lightgray",
            Quadrant::EasyButNotUrgent => "salmon",
        }
    }

    /// Label anchor offset from the divider crossing (x, y)
    pub fn offset(self) -> (f64, f64) {
        match self {
            Quadrant::QuickWins => (7.0, 4.0),
            Quadrant::DifficultButUrgent => (-7.0, 4.0),
            Quadrant::LowerPriority => (-7.0, -4.0),
            Quadrant::EasyButNotUrgent => (7.0, -4.0),
        }
    }
}

// ============================================================================
// Heat-map table
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PriorityTable {
    /// Attribute columns followed by "Total Score"
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub park: String,
    pub cells: Vec<HeatCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatCell {
    pub value: i64,
    /// Column-wise min-max position in [0, 1]
    pub intensity: f64,
    pub background: String,
    pub text_color: String,
}

// ============================================================================
// Ranking bar chart
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RankingChart {
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub park: String,
    pub total_score: i64,
    pub intensity: f64,
    pub color: String,
}

// ============================================================================
// Radar chart
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub axes: Vec<String>,
    /// Largest attribute value across the selection (0 when empty)
    pub radial_max: i64,
    pub traces: Vec<RadarTrace>,
}

/// Closed polygon: the first point is repeated at the end
#[derive(Debug, Clone, Serialize)]
pub struct RadarTrace {
    pub park: String,
    pub points: Vec<RadarPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarPoint {
    pub axis: String,
    pub value: i64,
    pub radius: f64,
}

// ============================================================================
// Detail view
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ParkDetail {
    pub park: String,
    /// 1-based position in the full ranking
    pub rank: usize,
    pub total_score: i64,
    pub feasibility: Option<i64>,
    pub urgency: Option<i64>,
    pub attributes: Vec<AttributeValue>,
    pub annotations: Vec<Annotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_covers_every_quadrant() {
        assert_eq!(Quadrant::classify(10.0, 10.0, 5.0, 5.0), Quadrant::QuickWins);
        assert_eq!(Quadrant::classify(1.0, 10.0, 5.0, 5.0), Quadrant::DifficultButUrgent);
        assert_eq!(Quadrant::classify(1.0, 1.0, 5.0, 5.0), Quadrant::LowerPriority);
        assert_eq!(Quadrant::classify(10.0, 1.0, 5.0, 5.0), Quadrant::EasyButNotUrgent);
    }

    #[test]
    fn test_classify_on_dividers_counts_as_high() {
        // On the feasibility divider
        assert_eq!(Quadrant::classify(5.0, 4.9, 5.0, 5.0), Quadrant::EasyButNotUrgent);
        assert_eq!(Quadrant::classify(5.0, 6.0, 5.0, 5.0), Quadrant::QuickWins);
        // On the urgency divider
        assert_eq!(Quadrant::classify(4.9, 5.0, 5.0, 5.0), Quadrant::DifficultButUrgent);
        assert_eq!(Quadrant::classify(5.0, 5.0, 5.0, 5.0), Quadrant::QuickWins);
    }

    #[test]
    fn test_quadrant_text() {
        assert_eq!(Quadrant::EasyButNotUrgent.label(), "Easy but Not Urgent");
        assert_eq!(Quadrant::EasyButNotUrgent.description(), "High Feasibility, Low Urgency");
        assert_eq!(Quadrant::ALL.len(), 4);
    }
}
