//! Chart-ready and text-ready projections of a ranked park table
//!
//! Every builder takes an already filtered `Ranking` (except the detail view,
//! which takes the full ranking) and returns plain serializable data.

pub mod types;
pub mod selection;
pub mod quadrant;
pub mod table;
pub mod ranking_chart;
pub mod radar;
pub mod detail;
pub mod generator;
pub mod formatters;

pub use types::{
    AttributeValue, Bar, Dashboard, DividerLine, HeatCell, Orientation, ParkDetail,
    PriorityTable, Quadrant, QuadrantChart, QuadrantLabel, RadarChart, RadarPoint, RadarTrace,
    RankingChart, ScatterPoint, TableRow,
};

pub use selection::Selection;
pub use quadrant::build_quadrant_chart;
pub use table::{build_priority_table, TOTAL_SCORE_COLUMN};
pub use ranking_chart::build_ranking_chart;
pub use radar::build_radar_chart;
pub use detail::build_park_detail;

pub use generator::DashboardGenerator;
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
