use actix_web::{web, HttpResponse, Responder, ResponseError};

use crate::{api::state::AppState, domain::{contact::resolver::ContactResolver, pet::repository::{PetQuery, PetRepository}, view::View}, utils::errors::ApiError};

pub async fn get_pet_contact(
    state: web::Data<AppState>,
    path: web::Path<String>
) -> impl Responder {

    let identification_number = path.into_inner();

    let query = PetQuery::IdentificationNumber(identification_number.clone());
    let pet = match state.pets.load(&query, View::Local).await {
        Ok(pets) => pets.into_iter().next(),
        Err(e) => return e.error_response()
    };

    let Some(pet) = pet else {
        return ApiError::NotFound(format!("Pet {} not found", identification_number)).error_response();
    };

    let resolver = ContactResolver::new(state.owners.clone(), state.messages.clone());

    match resolver.find_contact(&pet).await {
        Ok(Some(contact)) => HttpResponse::Ok().json(contact),
        Ok(None) => HttpResponse::NoContent().finish(),
        Err(e) => e.error_response()
    }
}
