//! # Visualizations Service Module
//!
//! Endpoints behind the visualizations page ("/visualizations").
//!
//! - `GET /api/visualizations/options`: values for the six filter dropdowns
//!   (each prefixed by `"All"`) and the columns that can be charted.
//! - `POST /api/visualizations/distribution`: bar chart of one column's value
//!   counts over the filtered records. Body: `DistributionRequest`.
//! - `POST /api/visualizations/grouped`: grouped bars of X counts split by
//!   Hue over the filtered records. Body: `GroupedRequest`.

mod distribution;
mod grouped;
mod options;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/visualizations";

/// Configures and returns the Actix scope for visualization routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/options", get().to(options::process))
        .route("/distribution", post().to(distribution::process))
        .route("/grouped", post().to(grouped::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing;
    use actix_web::{test, App};
    use common::model::chart::{ChartSpec, Values};
    use common::model::column::Column;
    use common::model::overview::FilterOptions;
    use serde_json::json;

    #[actix_web::test]
    async fn options_start_with_all() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/visualizations/options").to_request();
        let options: FilterOptions = test::call_and_read_body_json(&app, req).await;

        assert_eq!(options.filters.len(), 6);
        let country = &options.filters[0];
        assert_eq!(country.column, Column::Country);
        assert_eq!(country.values, vec!["All", "Australia", "Poland", "United States"]);
        assert_eq!(options.columns.len(), Column::ALL.len());
    }

    #[actix_web::test]
    async fn distribution_honours_filters() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/visualizations/distribution")
            .set_json(json!({
                "column": "treatment",
                "filters": {"constraints": [{"column": "Gender", "allowed": ["Female"]}]}
            }))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        assert_eq!(chart.data[0].x, Some(Values::Text(vec!["Yes".into(), "No".into()])));
        assert_eq!(chart.data[0].y, Some(Values::Numbers(vec![2.0, 1.0])));
    }

    #[actix_web::test]
    async fn distribution_without_matches_is_empty() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/visualizations/distribution")
            .set_json(json!({
                "column": "Days_Indoors",
                "filters": {"constraints": [{"column": "Country", "allowed": ["Iceland"]}]}
            }))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        assert_eq!(chart.point_count(), 0);
    }

    #[actix_web::test]
    async fn grouped_splits_by_hue() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/visualizations/grouped")
            .set_json(json!({"x": "Country", "hue": "Gender"}))
            .to_request();
        let chart: ChartSpec = test::call_and_read_body_json(&app, req).await;

        let names: Vec<_> = chart.data.iter().filter_map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["Female", "Male"]);
        assert_eq!(chart.point_count(), 5);
        assert_eq!(chart.layout.title.map(|t| t.text).as_deref(), Some("Grouped Bar: Country by Gender"));
    }

    #[actix_web::test]
    async fn unknown_column_in_body_is_rejected() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::post()
            .uri("/api/visualizations/distribution")
            .set_json(json!({"column": "Shoe_Size"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }
}
