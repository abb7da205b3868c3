//! # Feature Card Service
//!
//! Backend logic for `GET /api/features/{column}`.
//!
//! The column is resolved from its CSV header. The summary is computed over
//! the whole dataset (no filters apply on the features page) and paired with
//! a compact chart: a histogram for the encoded numeric view, value-count
//! bars otherwise.

use crate::analytics::distribution::distribution;
use crate::dataset::state::DatasetState;
use crate::presentation::categorical::summary_chart;
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::column::Column;
use common::model::filter::FilterSpec;
use common::model::stats::FeatureCard;
use common::requests::FeatureQuery;
use log::debug;

const CARD_CHART_HEIGHT: u32 = 120;

/// Actix web handler for `GET /api/features/{column}`.
///
/// # Returns
/// - `200 OK` with the `FeatureCard` as JSON.
/// - `404 Not Found` when no column has the given header.
pub(crate) async fn process(
    state: web::Data<DatasetState>,
    column: web::Path<String>,
    query: web::Query<FeatureQuery>,
) -> impl Responder {
    match feature_card(&state, &column, query.encoded) {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(e) => HttpResponse::NotFound().body(e),
    }
}

/// Builds the card for the column with header `header`. `encoded` only takes
/// effect for columns with an ordinal mapping.
pub(crate) fn feature_card(
    state: &DatasetState,
    header: &str,
    encoded: bool,
) -> Result<FeatureCard, String> {
    let column: Column = header.parse()?;
    let encoded = encoded && column.ordinal_mapping().is_some();
    debug!("feature card for {} (encoded: {})", column, encoded);

    let summary = distribution(&state.table, &FilterSpec::all(), column, encoded);
    let style = ChartStyle::default()
        .with_height(CARD_CHART_HEIGHT)
        .with_margin(0, 0, 0, 0);
    let chart = summary_chart(&summary, &style);

    Ok(FeatureCard {
        column,
        description: column.description().to_string(),
        encoded,
        summary,
        chart,
    })
}
