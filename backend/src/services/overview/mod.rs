//! # Overview Service Module
//!
//! Endpoints behind the home page ("/").
//!
//! - `GET /api/overview`: headline statistics plus the four static overview
//!   charts (gender, treatment, missing values, responses per country).
//! - `POST /api/overview/trend`: records over time for a date range, bucketed by
//!   day, week or month, optionally cumulative. Body: `TrendRequest`.
//! - `POST /api/overview/correlation`: |r| heatmap of the ordinal-encoded
//!   columns with cells below a threshold hidden. Body: `CorrelationRequest`.

mod correlation;
mod summary;
mod trend;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/overview";

/// Configures and returns the Actix scope for overview routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(summary::process))
        .route("/trend", post().to(trend::process))
        .route("/correlation", post().to(correlation::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing;
    use actix_web::{test, App};
    use common::model::chart::{ChartSpec, Values};
    use common::model::overview::OverviewResponse;
    use serde_json::json;

    #[actix_web::test]
    async fn summary_reports_headline_stats() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/overview").to_request();
        let resp: OverviewResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.stats.total_records, 6);
        assert_eq!(resp.stats.top_occupation, "Corporate");
        assert!((resp.stats.treatment_rate - 66.666).abs() < 0.01);
        assert_eq!(resp.stats.dataset_md5, "fixture");
        assert_eq!(resp.gender_chart.point_count(), 2);
        assert_eq!(resp.world_chart.point_count(), 3);
    }

    #[actix_web::test]
    async fn monthly_trend_counts_each_month() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/overview/trend")
            .set_json(json!({"start": "2014-08-01", "end": "2014-10-31", "period": "month"}))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        assert_eq!(chart.data[0].y, Some(Values::Numbers(vec![3.0, 2.0, 1.0])));
        assert_eq!(chart.layout.height, Some(420));
    }

    #[actix_web::test]
    async fn cumulative_trend_runs_up_to_total() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/overview/trend")
            .set_json(json!({"start": "2014-08-01", "end": "2014-10-31", "cumulative": true}))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        assert_eq!(chart.data[0].y, Some(Values::Numbers(vec![3.0, 5.0, 6.0])));
    }

    #[actix_web::test]
    async fn correlation_clamps_threshold() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/overview/correlation")
            .set_json(json!({"threshold": 7.5}))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        let title = chart.layout.title.map(|t| t.text);
        assert_eq!(title.as_deref(), Some("Feature Correlations (|r| ≥ 1.00)"));
    }

    #[actix_web::test]
    async fn malformed_trend_body_is_rejected() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/overview/trend")
            .set_json(json!({"start": "yesterday"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }
}
