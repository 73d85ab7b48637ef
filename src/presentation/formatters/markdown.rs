use crate::presentation::types::{Dashboard, ParkDetail, PriorityTable, QuadrantChart};

/// Markdown formatter for dashboards
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format the whole dashboard as markdown
    pub fn format_dashboard(dashboard: &Dashboard) -> String {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!("# {}\n\n", dashboard.title));

        if dashboard.selected.is_empty() {
            md.push_str("*No parks selected.*\n\n");
        } else {
            md.push_str(&format!("**Parks:** {}\n\n", dashboard.selected.join(", ")));
        }

        if let Some(scatter) = &dashboard.scatter {
            Self::format_quadrants(&mut md, scatter);
        }

        md.push_str("## Prioritization Table\n\n");
        Self::format_table(&mut md, &dashboard.table);

        md.push_str("## Overall Priority Ranking\n\n");
        for (i, bar) in dashboard.bar.bars.iter().enumerate() {
            md.push_str(&format!("{}. **{}**: {}\n", i + 1, bar.park, bar.total_score));
        }
        md.push('\n');

        md.push_str("## Radar Chart Comparison\n\n");
        if !dashboard.radar.traces.is_empty() {
            md.push_str(&format!("| Park | {} |\n", dashboard.radar.axes.join(" | ")));
            md.push_str(&format!("|------|{}\n", "------|".repeat(dashboard.radar.axes.len())));
            for trace in &dashboard.radar.traces {
                // The closing point repeats the first axis
                let radii: Vec<String> = trace
                    .points
                    .iter()
                    .take(dashboard.radar.axes.len())
                    .map(|p| format!("{:.2}", p.radius))
                    .collect();
                md.push_str(&format!("| {} | {} |\n", trace.park, radii.join(" | ")));
            }
            md.push('\n');
        }

        md.push_str("## Park Detail Viewer\n\n");
        if let Some(detail) = &dashboard.detail {
            md.push_str(&Self::format_detail(detail));
        }

        md
    }

    /// Detail block for one park: bulleted attributes then quoted notes
    pub fn format_detail(detail: &ParkDetail) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("### {}\n", detail.park));
        for attribute in &detail.attributes {
            md.push_str(&format!("- **{}**: {}  \n", attribute.name, attribute.value));
        }
        md.push_str(&format!("- **Total Score**: {} (rank {})  \n", detail.total_score, detail.rank));
        if let Some(feasibility) = detail.feasibility {
            md.push_str(&format!("- **Feasibility**: {}  \n", feasibility));
        }
        if let Some(urgency) = detail.urgency {
            md.push_str(&format!("- **Urgency**: {}  \n", urgency));
        }

        for annotation in &detail.annotations {
            md.push('\n');
            let lines: Vec<&str> = annotation
                .text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            md.push_str(&format!("> **{}**:", annotation.label));
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    md.push_str("  \n>");
                }
                md.push_str(&format!(" *{}*", line));
            }
            md.push('\n');
        }

        md
    }

    fn format_quadrants(md: &mut String, chart: &QuadrantChart) {
        md.push_str(&format!("## {}\n\n", chart.title));

        let (Some(x_mean), Some(y_mean)) = (chart.feasibility_mean, chart.urgency_mean) else {
            md.push_str("*No parks selected.*\n\n");
            return;
        };

        md.push_str(&format!(
            "Dividers at mean feasibility {:.1} and mean urgency {:.1}.\n\n",
            x_mean, y_mean
        ));
        md.push_str("| Park | Feasibility | Urgency | Quadrant |\n");
        md.push_str("|------|-------------|---------|----------|\n");
        for point in &chart.points {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                point.park,
                point.feasibility,
                point.urgency,
                point.quadrant.label()
            ));
        }
        md.push('\n');
    }

    fn format_table(md: &mut String, table: &PriorityTable) {
        md.push_str(&format!("| Park | {} |\n", table.columns.join(" | ")));
        md.push_str(&format!("|------|{}\n", "------|".repeat(table.columns.len())));
        for row in &table.rows {
            let cells: Vec<String> = row.cells.iter().map(|c| c.value.to_string()).collect();
            md.push_str(&format!("| {} | {} |\n", row.park, cells.join(" | ")));
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::presentation::{DashboardGenerator, Selection};

    #[test]
    fn test_detail_markdown() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::all(), Some("Hemlock Bluffs")).unwrap();
        let md = MarkdownFormatter::format_detail(dashboard.detail.as_ref().unwrap());

        assert!(md.starts_with("### Hemlock Bluffs\n"));
        assert!(md.contains("- **Threat Level**: 8  \n"));
        assert!(md.contains("- **Total Score**: 19 (rank 2)"));
        assert!(md.contains("- **Feasibility**: 6"));
        assert!(md.contains("- **Urgency**: 13"));
        assert!(md.contains("> **Most Concerning Invasive Species**: *Chinese Privet, Japanese Stiltgrass, Bamboo*"));
        // Multi-line notes stay inside the quote
        assert!(md.contains("  \n> *Japanese Stiltgrass:"));
    }

    #[test]
    fn test_dashboard_markdown_sections() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::all(), None).unwrap();
        let md = MarkdownFormatter::format_dashboard(&dashboard);

        assert!(md.starts_with("# Town of Cary Invasive Species Priority Dashboard"));
        assert!(md.contains("## Invasive Species Action Priority Matrix"));
        assert!(md.contains("| Carpenter | 15 | 10 | Quick Wins |"));
        assert!(md.contains("1. **Carpenter**: 25"));
        assert!(md.contains("| Carpenter | 8 | 2 | 9 | 3 | 9 | 25 |"));
        assert!(md.contains("### Carpenter"));
    }

    #[test]
    fn test_empty_selection_markdown() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::none(), None).unwrap();
        let md = MarkdownFormatter::format_dashboard(&dashboard);
        assert!(md.contains("*No parks selected.*"));
        assert!(!md.contains("1. **"));
    }
}
