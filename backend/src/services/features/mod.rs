//! # Features Service Module
//!
//! Endpoints behind the features page ("/features"), which shows one
//! summary card per dataset column.
//!
//! ## Sub-modules:
//! - `list`: the selectable columns with their descriptions.
//! - `card`: the summary statistics and small chart for one column.

mod card;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/features";

/// Configures and returns the Actix `Scope` for the feature routes.
///
/// # Registered Routes:
///
/// *   **`GET `** (scope root):
///     - **Handler**: `list::process`
///     - **Description**: Every column in schema order with its description and
///       whether it has an ordinal-encoded numeric view.
///
/// *   **`GET /{column}?encoded=bool`**:
///     - **Handler**: `card::process`
///     - **Description**: Summary card for the column named by its CSV header.
///       With `encoded=true` an encodable column is summarized numerically.
///       Unknown columns answer `404 Not Found`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{column}", get().to(card::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::model::column::Column;
    use common::model::stats::{ColumnSummary, FeatureCard, FeatureInfo};

    #[actix_web::test]
    async fn lists_every_column() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/features").to_request();
        let features: Vec<FeatureInfo> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(features.len(), Column::ALL.len());
        assert_eq!(features[0].column, Column::Timestamp);
        assert!(!features[0].encodable);
        assert!(features.iter().any(|f| f.column == Column::MoodSwings && f.encodable));
        assert!(features
            .iter()
            .any(|f| f.column == Column::DaysIndoors && !f.description.is_empty()));
    }

    #[actix_web::test]
    async fn raw_card_counts_categories() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/features/treatment").to_request();
        let card: FeatureCard = test::call_and_read_body_json(&app, req).await;

        assert!(!card.encoded);
        match card.summary {
            ColumnSummary::Categorical(s) => {
                assert_eq!(s.unique, 2);
                assert_eq!(s.mode, "Yes");
                assert_eq!(s.counts[0].count, 4);
            }
            other => panic!("expected categorical summary, got {:?}", other),
        }
        assert_eq!(card.chart.layout.height, Some(120));
    }

    #[actix_web::test]
    async fn encoded_card_is_numeric() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get()
            .uri("/api/features/self_employed?encoded=true")
            .to_request();
        let card: FeatureCard = test::call_and_read_body_json(&app, req).await;

        assert!(card.encoded);
        match card.summary {
            ColumnSummary::Numeric(s) => {
                assert_eq!(s.count, 5);
                assert_eq!(s.missing.count, 1);
            }
            other => panic!("expected numeric summary, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn encoded_flag_is_ignored_without_mapping() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get()
            .uri("/api/features/Country?encoded=true")
            .to_request();
        let card: FeatureCard = test::call_and_read_body_json(&app, req).await;

        assert!(!card.encoded);
        assert!(matches!(card.summary, ColumnSummary::Categorical(_)));
    }

    #[actix_web::test]
    async fn unknown_column_is_not_found() {
        let app = test::init_service(App::new().app_data(testing::state()).service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/features/Shoe_Size").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
