use crate::analytics::correlation::correlation_matrix;
use crate::dataset::state::DatasetState;
use crate::presentation::matrix::correlation_chart;
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::chart::ChartSpec;
use common::requests::CorrelationRequest;
use log::debug;

const HEATMAP_HEIGHT: u32 = 500;

pub(crate) async fn process(
    state: web::Data<DatasetState>,
    req: web::Json<CorrelationRequest>,
) -> impl Responder {
    let req = req.into_inner();
    // Pairwise Pearson over the whole table is CPU-bound; keep it off the worker.
    match web::block(move || build_correlation_chart(&state, &req)).await {
        Ok(chart) => HttpResponse::Ok().json(chart),
        Err(e) => HttpResponse::InternalServerError()
            .body(format!("Error computing correlations: {}", e)),
    }
}

/// Recomputes the matrix on every call; the threshold only affects display.
pub(crate) fn build_correlation_chart(state: &DatasetState, req: &CorrelationRequest) -> ChartSpec {
    let threshold = if req.threshold.is_finite() {
        req.threshold.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let matrix = correlation_matrix(&state.table);
    debug!(
        "correlation over {} numeric columns, threshold {:.2}",
        matrix.columns.len(),
        threshold
    );
    let style = ChartStyle::default()
        .with_height(HEATMAP_HEIGHT)
        .with_margin(40, 20, 40, 20);
    correlation_chart(&matrix, threshold, &style)
}
