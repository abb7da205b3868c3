use crate::analytics::overview::filter_options;
use crate::dataset::state::DatasetState;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(state: web::Data<DatasetState>) -> impl Responder {
    HttpResponse::Ok().json(filter_options(state.table.base()))
}
