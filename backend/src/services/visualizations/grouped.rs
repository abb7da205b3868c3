use crate::analytics::grouped::grouped_counts;
use crate::dataset::state::DatasetState;
use crate::presentation::categorical::grouped_chart;
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::chart::ChartSpec;
use common::requests::GroupedRequest;
use log::debug;

pub(crate) async fn process(
    state: web::Data<DatasetState>,
    req: web::Json<GroupedRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(build_grouped_chart(&state, &req))
}

pub(crate) fn build_grouped_chart(state: &DatasetState, req: &GroupedRequest) -> ChartSpec {
    let counts = grouped_counts(state.table.base(), &req.filters, req.x, req.hue);
    debug!("grouped {} by {}: {} pairs", req.x, req.hue, counts.len());
    grouped_chart(req.x, req.hue, &counts, &ChartStyle::default())
}
