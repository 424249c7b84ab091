use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{api::state::AppState, domain::disease::{model::{DiseaseWarningRequest, DiseaseWarningSummary}, notifier::DiseaseNotifier}};

pub async fn warn_about_disease(
    state: web::Data<AppState>,
    request: web::Json<DiseaseWarningRequest>
) -> impl Responder {

    let notifier = DiseaseNotifier::new(state.pets.clone(), state.mail_queue.clone());

    match notifier.warn(&request).await {
        Ok(requested) => HttpResponse::Ok().json(DiseaseWarningSummary { requested }),
        Err(e) => e.error_response()
    }
}
