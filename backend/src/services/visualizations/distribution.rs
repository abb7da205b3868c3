//! Backend logic for `POST /api/visualizations/distribution`.

use crate::analytics::distribution::value_counts;
use crate::analytics::filter;
use crate::dataset::state::DatasetState;
use crate::presentation::categorical::distribution_chart;
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::chart::ChartSpec;
use common::requests::DistributionRequest;
use log::debug;

pub(crate) async fn process(
    state: web::Data<DatasetState>,
    req: web::Json<DistributionRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(build_distribution_chart(&state, &req))
}

/// Value counts of the requested column over the rows that pass every filter,
/// most frequent first.
pub(crate) fn build_distribution_chart(state: &DatasetState, req: &DistributionRequest) -> ChartSpec {
    let base = state.table.base();
    let rows = filter::apply(base, &req.filters);
    debug!(
        "distribution of {} over {} of {} records ({} active filters)",
        req.column,
        rows.len(),
        base.len(),
        req.filters.active().count()
    );
    let counts = value_counts(rows.iter().filter_map(|&r| base.value(req.column, r)));
    distribution_chart(req.column, &counts, &ChartStyle::default())
}
