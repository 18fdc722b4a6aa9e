//! Full dashboard page rendering.

use std::fmt::Write;

use crate::api::DashboardData;
use crate::config::SidebarSettings;
use crate::error::{DashboardError, DashboardResult};
use crate::render::charts::{render_bins_chart, render_monthly_chart, render_usage_chart};
use crate::render::format::{escape_html, format_thousands};

pub const PAGE_HEADER: &str = "Proyek Akhir Analisis Data";
pub const USAGE_SUBHEADER: &str = "Perbandingan jumlah user Casual dengan user Registered";
pub const MONTHLY_SUBHEADER: &str = "Visualisasi performa penyewaan sepeda pada 10 bulan terakhir";
pub const BINS_SUBHEADER: &str = "Analisa Clustering dengan method: Binning";

/// Render the whole page: sidebar, header, metric row and the three chart
/// sections, in that order. Any chart failure fails the page.
pub fn render_dashboard_page(
    data: &DashboardData,
    sidebar: &SidebarSettings,
) -> DashboardResult<String> {
    let usage_svg = render_usage_chart(&data.summary.shares)?;
    let monthly_svg = render_monthly_chart(&data.monthly.months)?;
    let bins_svg = render_bins_chart(&data.bins)?;

    let totals = &data.summary.totals;
    let metrics = [
        ("Jumlah user casual", totals.casual),
        ("Jumlah user registered", totals.registered),
        ("Total user casual dan registered", totals.total),
    ];

    let mut html = String::with_capacity(usage_svg.len() + monthly_svg.len() + bins_svg.len() + 8192);

    write!(
        html,
        r##"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{header}</title>
    <style>
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
            background: #ffffff;
            color: #31333f;
            line-height: 1.5;
            display: flex;
            min-height: 100vh;
        }}
        aside {{
            width: 300px;
            flex-shrink: 0;
            background: #f0f2f6;
            padding: 32px 24px;
        }}
        aside img {{ width: 100%; margin-bottom: 16px; }}
        aside p {{ margin-bottom: 12px; }}
        main {{ flex: 1; max-width: 1100px; margin: 0 auto; padding: 48px 32px; }}
        h1 {{ font-size: 36px; font-weight: 700; margin-bottom: 24px; }}
        h2 {{ font-size: 26px; font-weight: 600; margin: 32px 0 16px; }}
        .metrics {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 16px;
        }}
        .metric-label {{ font-size: 14px; }}
        .metric-value {{ font-size: 36px; }}
        .chart svg {{ width: 100%; height: auto; }}
    </style>
</head>
<body>
"##,
        header = escape_html(PAGE_HEADER),
    )
    .map_err(DashboardError::render)?;

    write!(
        html,
        r##"<aside>
    <img src="{logo}" alt="logo">
    <p>Nama: {name}</p>
    <p>E-Mail: {email}</p>
    <p>ID Dicoding: {dicoding}</p>
    <p>Dataset yang dipakai: {dataset}</p>
</aside>
<main>
    <h1>{header}</h1>
    <div class="metrics">
"##,
        logo = escape_html(&sidebar.logo_url),
        name = escape_html(&sidebar.name),
        email = escape_html(&sidebar.email),
        dicoding = escape_html(&sidebar.dicoding_id),
        dataset = escape_html(&data.dataset.name),
        header = escape_html(PAGE_HEADER),
    )
    .map_err(DashboardError::render)?;

    for (label, value) in metrics {
        write!(
            html,
            r##"        <div class="metric">
            <div class="metric-label">{label}</div>
            <div class="metric-value">{value}</div>
        </div>
"##,
            label = escape_html(label),
            value = format_thousands(value),
        )
        .map_err(DashboardError::render)?;
    }

    write!(
        html,
        r##"    </div>
    <h2>{usage_title}</h2>
    <div class="chart" id="usage-chart">{usage_svg}</div>
    <h2>{monthly_title}</h2>
    <div class="chart" id="monthly-chart">{monthly_svg}</div>
    <h2>{bins_title}</h2>
    <div class="chart" id="bins-chart">{bins_svg}</div>
</main>
</body>
</html>
"##,
        usage_title = escape_html(USAGE_SUBHEADER),
        monthly_title = escape_html(MONTHLY_SUBHEADER),
        bins_title = escape_html(BINS_SUBHEADER),
    )
    .map_err(DashboardError::render)?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, UsageRecord};
    use crate::services::compute_dashboard;
    use chrono::NaiveDate;

    fn two_row_dataset() -> Dataset {
        let day = |d: u32| NaiveDate::from_ymd_opt(2011, 1, d).unwrap();
        Dataset::new(vec![
            UsageRecord {
                date: day(1),
                casual: 5,
                registered: 20,
                total: 25,
                temperature: 0.2,
                humidity: 0.8,
                windspeed: 0.1,
            },
            UsageRecord {
                date: day(2),
                casual: 10,
                registered: 30,
                total: 40,
                temperature: 0.4,
                humidity: 0.6,
                windspeed: 0.3,
            },
        ])
    }

    #[test]
    fn test_page_sections_in_order() {
        let data = compute_dashboard(&two_row_dataset(), "Bike Sharing Dataset", 10).unwrap();
        let html = render_dashboard_page(&data, &SidebarSettings::default()).unwrap();

        let positions: Vec<usize> = [
            "<aside>",
            PAGE_HEADER,
            "Jumlah user casual",
            USAGE_SUBHEADER,
            MONTHLY_SUBHEADER,
            BINS_SUBHEADER,
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        assert_eq!(html.matches("<svg").count(), 3);
    }

    #[test]
    fn test_page_metrics_and_sidebar() {
        let data = compute_dashboard(&two_row_dataset(), "Bike Sharing Dataset", 10).unwrap();
        let html = render_dashboard_page(&data, &SidebarSettings::default()).unwrap();

        assert!(html.contains(r#"<div class="metric-value">15</div>"#));
        assert!(html.contains(r#"<div class="metric-value">50</div>"#));
        assert!(html.contains(r#"<div class="metric-value">65</div>"#));
        assert!(html.contains("Nama: Jonathan Lokianto"));
        assert!(html.contains("Dataset yang dipakai: Bike Sharing Dataset"));
    }

    #[test]
    fn test_sidebar_text_is_escaped() {
        let data = compute_dashboard(&Dataset::default(), "<script>", 10).unwrap();
        let sidebar = SidebarSettings {
            name: "A & B".to_string(),
            ..SidebarSettings::default()
        };
        let html = render_dashboard_page(&data, &sidebar).unwrap();

        assert!(html.contains("Nama: A &amp; B"));
        assert!(html.contains("Dataset yang dipakai: &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
