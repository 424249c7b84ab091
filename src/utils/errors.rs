use std::error::Error;

use actix_web::{HttpResponse, ResponseError};
use mongodb::error::Error as MongoError;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    MongoError(#[from] MongoError)
}

fn error_body(message: &str, code: u16) -> serde_json::Value {
    serde_json::json!({
        "error": message,
        "code": code
    })
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidData(message) => {
                HttpResponse::BadRequest().json(error_body(message, 400))
            },
            ApiError::NotFound(message) => {
                HttpResponse::NotFound().json(error_body(message, 404))
            },
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(error_body(message, 500))
            },
            ApiError::MongoError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {}", message),
                    "code": 500,
                    "details": message.source().map(|src| src.to_string())
                }))
            }
        }
    }
}
