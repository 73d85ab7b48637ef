// Page handlers for HTML rendering with Askama

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use askama::Template;
use pulldown_cmark::{html, Parser};

use crate::api_server::{AppError, AppState};
use crate::data::Dataset;
use crate::presentation::{Dashboard, DashboardGenerator, HtmlFormatter, MarkdownFormatter, Selection};

// ============================================================================
// Dashboard Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub title: String,
    pub variant_key: String,
    pub variants: Vec<VariantLink>,
    pub parks: Vec<ParkOption>,
    pub scatter: Vec<ScatterRow>,
    pub scatter_means: Option<String>,
    pub table_html: String,
    pub bars_html: String,
    pub radar_axes: Vec<String>,
    pub radar_rows: Vec<RadarRow>,
    pub detail_html: String,
}

pub struct VariantLink {
    pub href: String,
    pub title: String,
    pub active: bool,
}

pub struct ParkOption {
    pub name: String,
    pub selected: bool,
    pub detail: bool,
    pub detail_href: String,
}

pub struct ScatterRow {
    pub park: String,
    pub feasibility: i64,
    pub urgency: i64,
    pub quadrant: String,
    pub background: String,
}

pub struct RadarRow {
    pub park: String,
    pub values: Vec<i64>,
}

/// Filter controls from the page form
///
/// Checkboxes submit repeated `park=` pairs plus a `filtered` marker, so an
/// all-unchecked form still means "no parks" rather than "all parks".
fn selection_from_pairs(pairs: &[(String, String)]) -> Selection {
    let filtered = pairs.iter().any(|(k, _)| k == "filtered");
    let checked = pairs.iter().filter(|(k, _)| k == "park").map(|(_, v)| v.as_str());

    if filtered {
        Selection::of(checked)
    } else {
        let csv = pairs.iter().find(|(k, _)| k == "parks").map(|(_, v)| v.as_str());
        Selection::from_param(csv)
    }
}

fn detail_from_pairs(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(k, v)| k == "detail" && !v.is_empty())
        .map(|(_, v)| v.as_str())
}

fn render_markdown(md: &str) -> String {
    let parser = Parser::new(md);
    let mut out = String::with_capacity(md.len() * 2);
    html::push_html(&mut out, parser);
    out
}

fn build_template(dataset: &Dataset, dashboard: &Dashboard, selection: &Selection) -> DashboardTemplate {
    let variant_key = dataset.variant.key().to_string();
    let detail_park = dashboard.detail.as_ref().map(|d| d.park.as_str());

    let variants = crate::data::DatasetVariant::ALL
        .iter()
        .map(|v| VariantLink {
            href: format!("/dashboard/{}", v.key()),
            title: v.title().to_string(),
            active: *v == dataset.variant,
        })
        .collect();

    let parks = dataset
        .records
        .iter()
        .map(|record| ParkOption {
            name: record.name.clone(),
            selected: selection.contains(&record.name),
            detail: Some(record.name.as_str()) == detail_park,
            detail_href: format!(
                "/dashboard/{}?detail={}",
                variant_key,
                urlencoding::encode(&record.name)
            ),
        })
        .collect();

    let (scatter, scatter_means) = match &dashboard.scatter {
        Some(chart) => (
            chart
                .points
                .iter()
                .map(|p| ScatterRow {
                    park: p.park.clone(),
                    feasibility: p.feasibility,
                    urgency: p.urgency,
                    quadrant: p.quadrant.label().to_string(),
                    background: p.quadrant.background().to_string(),
                })
                .collect(),
            match (chart.feasibility_mean, chart.urgency_mean) {
                (Some(x), Some(y)) => Some(format!("mean feasibility {:.1}, mean urgency {:.1}", x, y)),
                _ => None,
            },
        ),
        None => (Vec::new(), None),
    };

    let radar_rows = dashboard
        .radar
        .traces
        .iter()
        .map(|t| RadarRow {
            park: t.park.clone(),
            values: t.points.iter().take(dashboard.radar.axes.len()).map(|p| p.value).collect(),
        })
        .collect();

    let detail_html = dashboard
        .detail
        .as_ref()
        .map(|d| render_markdown(&MarkdownFormatter::format_detail(d)))
        .unwrap_or_default();

    DashboardTemplate {
        title: dashboard.title.clone(),
        variant_key,
        variants,
        parks,
        scatter,
        scatter_means,
        table_html: HtmlFormatter::format_table(&dashboard.table),
        bars_html: HtmlFormatter::format_bars(&dashboard.bar),
        radar_axes: dashboard.radar.axes.clone(),
        radar_rows,
        detail_html,
    }
}

fn render_page(dataset: &Dataset, pairs: &[(String, String)]) -> Result<Html<String>, AppError> {
    let selection = selection_from_pairs(pairs);
    let dashboard = DashboardGenerator::generate(dataset, &selection, detail_from_pairs(pairs))?;
    let template = build_template(dataset, &dashboard, &selection);

    Ok(Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    })))
}

pub async fn dashboard_page(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = state.dataset(&variant)?;
    render_page(dataset, &pairs)
}

pub async fn default_dashboard_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let dataset = state.dataset(state.config.default_variant.key())?;
    render_page(dataset, &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_selection_from_form() {
        assert_eq!(selection_from_pairs(&pairs(&[])), Selection::All);
        assert_eq!(selection_from_pairs(&pairs(&[("filtered", "1")])), Selection::none());
        assert_eq!(
            selection_from_pairs(&pairs(&[("filtered", "1"), ("park", "Carpenter")])),
            Selection::of(["Carpenter"])
        );
        assert_eq!(
            selection_from_pairs(&pairs(&[("parks", "Carpenter,Dunham Park")])),
            Selection::of(["Carpenter", "Dunham Park"])
        );
    }

    #[test]
    fn test_detail_from_form() {
        assert_eq!(detail_from_pairs(&pairs(&[("detail", "")])), None);
        assert_eq!(detail_from_pairs(&pairs(&[("detail", "Carpenter")])), Some("Carpenter"));
    }

    #[test]
    fn test_markdown_rendering() {
        let html = render_markdown("### Carpenter\n- **Threat Level**: 8\n");
        assert!(html.contains("<h3>Carpenter</h3>"));
        assert!(html.contains("<strong>Threat Level</strong>"));
    }

    #[test]
    fn test_page_renders() {
        let dataset = Dataset::cary();
        let page = render_page(&dataset, &pairs(&[("detail", "Dunham Park")])).unwrap();
        assert!(page.0.contains("Town of Cary Invasive Species Priority Dashboard"));
        assert!(page.0.contains("<h3>Dunham Park</h3>"));
        assert!(page.0.contains("Quick Wins"));
    }
}
