use actix_web::{HttpResponse, Responder};
use common::model::column::Column;
use common::model::stats::FeatureInfo;

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(feature_list())
}

pub(crate) fn feature_list() -> Vec<FeatureInfo> {
    Column::ALL
        .into_iter()
        .map(|column| FeatureInfo {
            column,
            description: column.description().to_string(),
            encodable: column.ordinal_mapping().is_some(),
        })
        .collect()
}
