use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use launch_dashboard::api::create_router;
use launch_dashboard::bridge::{
    ChartUpdate, ControlEvent, ControlId, DashboardLayout, OutputId, RawControls,
};
use launch_dashboard::models::*;
use launch_dashboard::table::LaunchTable;

fn setup() -> TestServer {
    let table = LaunchTable::from_records(vec![
        LaunchRecord::new("SiteA", 3000.0, "v1.0", 1),
        LaunchRecord::new("SiteA", 5000.0, "v1.1", 0),
        LaunchRecord::new("SiteB", 4000.0, "v1.0", 1),
    ])
    .expect("Failed to build table");
    let app = create_router(Arc::new(table));
    TestServer::new(app).expect("Failed to create test server")
}

fn event(changed: Option<ControlId>, site: &str, payload: [f64; 2]) -> ControlEvent {
    ControlEvent::new(
        changed,
        RawControls {
            site: site.to_string(),
            payload,
        },
    )
}

mod page {
    use super::*;

    #[tokio::test]
    async fn serves_dashboard_html() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("SpaceX Launch Records Dashboard"));
        assert!(html.contains("success-payload-scatter-chart"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn layout_lists_sites_and_payload_bounds() {
        let server = setup();

        let response = server.get("/api/v1/layout").await;

        response.assert_status_ok();
        let layout: DashboardLayout = response.json();
        let sites: Vec<_> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(sites, ["All Sites", "SiteA", "SiteB"]);
        assert_eq!(layout.payload_slider.min, 3000.0);
        assert_eq!(layout.payload_slider.max, 5000.0);
        assert_eq!(layout.charts.len(), 2);
    }
}

mod charts {
    use super::*;

    #[tokio::test]
    async fn initial_charts_use_defaults() {
        let server = setup();

        let response = server.get("/api/v1/charts").await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        let pie = update.get(OutputId::SuccessPieChart).expect("pie chart");
        assert_eq!(pie.title(), "Total Success Launches by Site");
        assert_eq!(pie.as_pie().expect("pie").total(), 2);
        let scatter = update
            .get(OutputId::SuccessPayloadScatterChart)
            .expect("scatter chart");
        assert_eq!(scatter.len(), 3);
    }

    #[tokio::test]
    async fn success_pie_for_single_site() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/success-pie")
            .add_query_param("site", "SiteA")
            .await;

        response.assert_status_ok();
        let chart: ChartDescription = response.json();
        let pie = chart.as_pie().expect("pie chart");
        assert_eq!(pie.title, "Total Success Launches for SiteA");
        assert_eq!(pie.value_of("0"), Some(1));
        assert_eq!(pie.value_of("1"), Some(1));
    }

    #[tokio::test]
    async fn payload_scatter_honours_query_range() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/payload-scatter")
            .add_query_param("low", 3500)
            .add_query_param("high", 5000)
            .await;

        response.assert_status_ok();
        let chart: ChartDescription = response.json();
        let xs: Vec<f64> = chart
            .as_scatter()
            .expect("scatter chart")
            .points
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, [5000.0, 4000.0]);
    }

    #[tokio::test]
    async fn unknown_site_returns_empty_chart() {
        let server = setup();

        let response = server
            .get("/api/v1/charts/success-pie")
            .add_query_param("site", "Nowhere")
            .await;

        response.assert_status_ok();
        let chart: ChartDescription = response.json();
        assert!(chart.is_empty());
    }
}

mod callback {
    use super::*;

    #[tokio::test]
    async fn site_change_updates_both_charts() {
        let server = setup();

        let response = server
            .post("/api/v1/callback")
            .json(&event(Some(ControlId::SiteDropdown), "SiteB", [3000.0, 5000.0]))
            .await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        assert_eq!(update.outputs.len(), 2);
        let scatter = update
            .get(OutputId::SuccessPayloadScatterChart)
            .expect("scatter chart");
        assert_eq!(scatter.len(), 1);
    }

    #[tokio::test]
    async fn payload_change_updates_only_scatter() {
        let server = setup();

        let response = server
            .post("/api/v1/callback")
            .json(&event(Some(ControlId::PayloadSlider), "All Sites", [3000.0, 3000.0]))
            .await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        assert!(update.get(OutputId::SuccessPieChart).is_none());
        let scatter = update
            .get(OutputId::SuccessPayloadScatterChart)
            .expect("scatter chart");
        assert_eq!(scatter.len(), 1);
    }

    #[tokio::test]
    async fn inverted_range_degrades_to_empty_scatter() {
        let server = setup();

        let response = server
            .post("/api/v1/callback")
            .json(&event(Some(ControlId::PayloadSlider), "All Sites", [5000.0, 3000.0]))
            .await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        let scatter = update
            .get(OutputId::SuccessPayloadScatterChart)
            .expect("scatter chart");
        assert!(scatter.is_empty());
    }

    #[tokio::test]
    async fn page_load_event_updates_every_chart() {
        let server = setup();

        let response = server
            .post("/api/v1/callback")
            .json(&serde_json::json!({
                "values": { "site": "All Sites", "payload": [3000.0, 5000.0] }
            }))
            .await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        assert_eq!(update.outputs.len(), 2);
    }

    #[tokio::test]
    async fn rejects_unknown_control_id() {
        let server = setup();

        let response = server
            .post("/api/v1/callback")
            .json(&serde_json::json!({
                "changed": "launch-year-slider",
                "values": { "site": "All Sites", "payload": [3000.0, 5000.0] }
            }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn echoes_request_seq() {
        let server = setup();
        let mut change = event(Some(ControlId::SiteDropdown), "SiteA", [3000.0, 5000.0]);
        change.seq = Some(42);

        let response = server.post("/api/v1/callback").json(&change).await;

        response.assert_status_ok();
        let update: ChartUpdate = response.json();
        assert_eq!(update.seq, Some(42));
        assert!(update.dispatched.is_some());
    }

    #[tokio::test]
    async fn initial_charts_cover_the_full_payload_range() {
        let server = setup();

        let layout: DashboardLayout = server.get("/api/v1/layout").await.json();
        let slider = &layout.payload_slider;
        let response = server
            .post("/api/v1/callback")
            .json(&event(
                Some(ControlId::SiteDropdown),
                "All Sites",
                slider.value.into(),
            ))
            .await;

        let update: ChartUpdate = response.json();
        let scatter = update
            .get(OutputId::SuccessPayloadScatterChart)
            .expect("scatter chart");
        assert_eq!(scatter.len(), 3);
    }
}
