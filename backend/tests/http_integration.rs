#![cfg(feature = "http-server")]

mod support;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use bikeshare_dashboard::config::DashboardConfig;
use bikeshare_dashboard::http::{create_router, AppState};
use bikeshare_dashboard::models::Dataset;

use support::monthly_dataset;

fn app_with(dataset: Dataset) -> Router {
    create_router(AppState::new(dataset, DashboardConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, content_type, body) = get(app, uri).await;
    assert_eq!(content_type.as_deref(), Some("application/json"), "{uri}");
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_dashboard_page_is_html() {
    let (status, content_type, body) = get(app_with(monthly_dataset(14)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Proyek Akhir Analisis Data"));
    assert_eq!(html.matches("<svg").count(), 3);
}

#[tokio::test]
async fn test_health_reports_dataset() {
    let (status, body) = get_json(app_with(monthly_dataset(3)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["dataset"]["records"], 3);
    assert_eq!(body["dataset"]["name"], "Bike Sharing Dataset");
    assert_eq!(body["dataset"]["first_date"], "2011-01-15");
}

#[tokio::test]
async fn test_summary_totals() {
    let (status, body) = get_json(app_with(monthly_dataset(3)), "/v1/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["casual"], 6);
    assert_eq!(body["totals"]["registered"], 300);
    assert_eq!(body["totals"]["total"], 306);
    assert_eq!(body["shares"][0]["user_type"], "casual");
    assert_eq!(body["shares"][1]["formatted"], "300");
}

#[tokio::test]
async fn test_yearly_totals() {
    let (status, body) = get_json(app_with(monthly_dataset(14)), "/v1/yearly").await;

    assert_eq!(status, StatusCode::OK);
    let years = body.as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], 2011);
    assert_eq!(years[1]["registered"], 200);
}

#[tokio::test]
async fn test_monthly_default_and_custom_window() {
    let (status, body) = get_json(app_with(monthly_dataset(14)), "/v1/monthly").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["window"], 10);
    assert_eq!(body["months"].as_array().unwrap().len(), 10);

    let (status, body) = get_json(app_with(monthly_dataset(14)), "/v1/monthly?months=3").await;
    assert_eq!(status, StatusCode::OK);
    let months = body["months"].as_array().unwrap();
    assert_eq!(months.len(), 3);
    assert_eq!(months[2]["month_name"], "February");
    assert_eq!(months[2]["month_end"], "2012-02-29");
}

#[tokio::test]
async fn test_monthly_rejects_out_of_range_window() {
    for uri in ["/v1/monthly?months=0", "/v1/monthly?months=121"] {
        let (status, body) = get_json(app_with(monthly_dataset(3)), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_bins_cover_every_record() {
    let (status, body) = get_json(app_with(monthly_dataset(12)), "/v1/bins").await;

    assert_eq!(status, StatusCode::OK);
    let covariates = body.as_array().unwrap();
    assert_eq!(covariates.len(), 3);
    assert_eq!(covariates[0]["covariate"], "temperature");
    assert_eq!(covariates[1]["bins"].as_array().unwrap().len(), 4);
    for covariate in covariates {
        let count: u64 = covariate["bins"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_u64().unwrap())
            .sum();
        assert_eq!(count, 12);
    }
}

#[tokio::test]
async fn test_dashboard_json_sections() {
    let (status, body) = get_json(app_with(monthly_dataset(5)), "/v1/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    for section in ["dataset", "summary", "yearly", "monthly", "bins"] {
        assert!(body.get(section).is_some(), "missing {section}");
    }
}

#[tokio::test]
async fn test_charts_are_svg() {
    for chart in ["usage", "monthly", "bins", "usage.svg"] {
        let uri = format!("/v1/charts/{}", chart);
        let (status, content_type, body) = get(app_with(monthly_dataset(5)), &uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(String::from_utf8(body).unwrap().contains("<svg"));
    }
}

#[tokio::test]
async fn test_unknown_chart_is_not_found() {
    let (status, body) = get_json(app_with(monthly_dataset(5)), "/v1/charts/pie").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_empty_dataset_still_renders() {
    let (status, _, body) = get(app_with(Dataset::default()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("Jumlah user casual"));

    let (status, body) = get_json(app_with(Dataset::default()), "/v1/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["total"], 0);
}

#[tokio::test]
async fn test_count_overflow_is_server_error() {
    let half = u64::MAX / 2 + 1;
    let dataset = Dataset::new(vec![
        support::record("2011-01-01", half, 0, (0.2, 0.5, 0.1)),
        support::record("2011-01-02", half, 0, (0.4, 0.6, 0.3)),
    ]);

    for uri in ["/v1/summary", "/v1/yearly", "/v1/monthly", "/v1/dashboard"] {
        let (status, body) = get_json(app_with(dataset.clone()), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["code"], "DASHBOARD_ERROR");
        assert!(body["details"].as_str().unwrap().contains("overflows"));
    }

    let (status, _, _) = get(app_with(dataset.clone()), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // bin counts never sum the usage columns
    let (status, _) = get_json(app_with(dataset), "/v1/bins").await;
    assert_eq!(status, StatusCode::OK);
}
