use crate::analytics::overview::{column_counts, missing_counts, overview_stats};
use crate::dataset::state::DatasetState;
use crate::presentation::categorical::{missing_chart, treatment_chart};
use crate::presentation::overview::{gender_chart, world_chart};
use crate::presentation::ChartStyle;
use actix_web::{web, HttpResponse, Responder};
use common::model::column::Column;
use common::model::overview::OverviewResponse;
use log::debug;

const OVERVIEW_CHART_HEIGHT: u32 = 300;

pub(crate) async fn process(state: web::Data<DatasetState>) -> impl Responder {
    HttpResponse::Ok().json(build_overview(&state))
}

/// Headline figures and the overview charts, all over the unfiltered dataset.
pub(crate) fn build_overview(state: &DatasetState) -> OverviewResponse {
    let table = &state.table;
    let base = table.base();
    debug!("building overview over {} records", base.len());

    let style = ChartStyle::default().with_height(OVERVIEW_CHART_HEIGHT);

    OverviewResponse {
        stats: overview_stats(table, &state.fingerprint),
        gender_chart: gender_chart(
            &column_counts(base, Column::Gender),
            &style.clone().with_margin(0, 0, 30, 0),
        ),
        treatment_chart: treatment_chart(
            &column_counts(base, Column::Treatment),
            &style.clone().with_margin(40, 20, 30, 0),
        ),
        missing_chart: missing_chart(&missing_counts(base), &style.clone().with_margin(80, 20, 20, 20)),
        world_chart: world_chart(
            &column_counts(base, Column::Country),
            &style.with_margin(0, 0, 40, 20),
        ),
    }
}
