use actix_web::{get, web, Responder};

use crate::api::handlers::contact_handlers::get_pet_contact;
use crate::api::handlers::disease_handlers::warn_about_disease;

#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the Pet Clinic API. Use /pets/{identification_number}/contact or POST /disease-warnings."
}

pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/pets/{identification_number}/contact")
            .route(web::get().to(get_pet_contact))
    );

    cfg.service(
        web::resource("/disease-warnings")
            .route(web::post().to(warn_about_disease))
    );

    cfg.service(entry_point);
}
