use crate::presentation::formatters::MarkdownFormatter;
use crate::presentation::types::{Dashboard, PriorityTable, RankingChart};

/// HTML formatter for dashboards
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format dashboard as standalone HTML with embedded CSS
    pub fn format(dashboard: &Dashboard) -> String {
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&dashboard.title)));
        html.push_str("<style>\n");
        html.push_str(Self::STYLE);
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&dashboard.title)));

        if let Some(scatter) = &dashboard.scatter {
            html.push_str(&format!("<h2>{}</h2>\n", escape_html(&scatter.title)));
            if scatter.points.is_empty() {
                html.push_str("<p><em>No parks selected.</em></p>\n");
            } else {
                html.push_str("<table>\n<thead><tr><th>Park</th><th>Feasibility</th><th>Urgency</th><th>Quadrant</th></tr></thead>\n<tbody>\n");
                for point in &scatter.points {
                    html.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td style=\"background:{}\">{}</td></tr>\n",
                        escape_html(&point.park),
                        point.feasibility,
                        point.urgency,
                        point.quadrant.background(),
                        point.quadrant.label()
                    ));
                }
                html.push_str("</tbody>\n</table>\n");
            }
        }

        html.push_str("<h2>Prioritization Table</h2>\n");
        html.push_str(&Self::format_table(&dashboard.table));

        html.push_str("<h2>Overall Priority Ranking</h2>\n");
        html.push_str(&Self::format_bars(&dashboard.bar));

        if let Some(detail) = &dashboard.detail {
            html.push_str("<h2>Park Detail Viewer</h2>\n");
            html.push_str("<pre class=\"detail\">");
            html.push_str(&escape_html(&MarkdownFormatter::format_detail(detail)));
            html.push_str("</pre>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Heat-map table fragment with inline cell colours
    pub fn format_table(table: &PriorityTable) -> String {
        let mut html = String::with_capacity(2048);

        html.push_str("<table class=\"heatmap\">\n<thead><tr><th>Park</th>");
        for column in &table.columns {
            html.push_str(&format!("<th>{}</th>", escape_html(column)));
        }
        html.push_str("</tr></thead>\n<tbody>\n");

        for row in &table.rows {
            html.push_str(&format!("<tr><th>{}</th>", escape_html(&row.park)));
            for cell in &row.cells {
                html.push_str(&format!(
                    "<td style=\"background:{};color:{}\">{}</td>",
                    cell.background, cell.text_color, cell.value
                ));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>\n");
        html
    }

    /// Horizontal bars scaled to the largest total
    pub fn format_bars(chart: &RankingChart) -> String {
        let max = chart.bars.iter().map(|b| b.total_score).max().unwrap_or(0);
        let mut html = String::with_capacity(1024);

        html.push_str("<div class=\"bars\">\n");
        for bar in &chart.bars {
            let width = if max > 0 {
                (bar.total_score.max(0) as f64 / max as f64 * 100.0).round()
            } else {
                0.0
            };
            html.push_str(&format!(
                "<div class=\"bar-row\"><span class=\"bar-label\">{}</span><span class=\"bar\" style=\"width:{}%;background:{}\">{}</span></div>\n",
                escape_html(&bar.park),
                width,
                bar.color,
                bar.total_score
            ));
        }
        html.push_str("</div>\n");
        html
    }

    const STYLE: &'static str = "body { font-family: system-ui, sans-serif; max-width: 960px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n\
        h1 { color: #2c3e50; margin-bottom: 10px; }\n\
        h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n\
        table { width: 100%; border-collapse: collapse; margin: 16px 0; }\n\
        th { background: #34495e; color: white; text-align: left; padding: 8px; font-weight: 600; }\n\
        td { padding: 8px; border-bottom: 1px solid #ecf0f1; }\n\
        .bar-row { display: flex; align-items: center; margin: 4px 0; }\n\
        .bar-label { width: 160px; }\n\
        .bar { display: inline-block; padding: 2px 6px; color: white; min-width: 2em; }\n\
        .detail { white-space: pre-wrap; background: #f8f9fa; padding: 12px; }\n";
}

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::presentation::{DashboardGenerator, Selection};

    #[test]
    fn test_table_fragment_colours() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::all(), None).unwrap();
        let html = HtmlFormatter::format_table(&dashboard.table);

        assert!(html.contains("<th>Total Score</th>"));
        assert!(html.contains("<tr><th>Carpenter</th>"));
        assert!(html.contains("background:#800026;color:#f1f1f1\">25</td>"));
    }

    #[test]
    fn test_standalone_document() {
        let dashboard = DashboardGenerator::generate(&Dataset::cary(), &Selection::all(), None).unwrap();
        let html = HtmlFormatter::format(&dashboard);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Quick Wins"));
        assert!(html.contains("width:100%"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Privet & <Mimosa>"), "Privet &amp; &lt;Mimosa&gt;");
    }
}
