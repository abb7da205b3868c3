use crate::analytics::trend::trend;
use crate::dataset::state::DatasetState;
use crate::presentation::temporal::trend_chart;
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::chart::ChartSpec;
use common::requests::TrendRequest;
use log::debug;

const TREND_CHART_HEIGHT: u32 = 420;

pub(crate) async fn process(
    state: web::Data<DatasetState>,
    req: web::Json<TrendRequest>,
) -> impl Responder {
    HttpResponse::Ok().json(build_trend_chart(&state, &req))
}

pub(crate) fn build_trend_chart(state: &DatasetState, req: &TrendRequest) -> ChartSpec {
    let points = trend(&state.table, req.start, req.end, req.period, req.cumulative);
    debug!(
        "trend {}..={} by {:?} (cumulative: {}): {} buckets",
        req.start,
        req.end,
        req.period,
        req.cumulative,
        points.len()
    );
    let style = ChartStyle::default()
        .with_height(TREND_CHART_HEIGHT)
        .with_margin(40, 40, 60, 40);
    trend_chart(&points, req.cumulative, &style)
}
