//! Renders mail bodies from tera templates.
//!
//! Templates are registered under their path (e.g.
//! `templates/disease-warning-mailing.txt`) and rendered against the mail's
//! JSON parameters.

use std::error::Error as _;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tera::{Context, Tera};

use crate::domain::disease::notifier::DISEASE_WARNING_TEMPLATE;
use crate::domain::email::model::{Email, EmailInfo};
use crate::utils::errors::ApiError;

const DISEASE_WARNING_BODY: &str = include_str!("../../../templates/disease-warning-mailing.txt");

fn template_error(e: tera::Error) -> ApiError {
    // tera keeps the useful part (undefined variable, syntax position) in the source chain
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ApiError::InternalServerError(message)
}

#[derive(Clone, Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {

    /// A renderer holding the built-in templates.
    pub fn new() -> Result<Self, ApiError> {
        let mut renderer = TemplateRenderer { tera: Tera::default() };
        renderer.register(DISEASE_WARNING_TEMPLATE, DISEASE_WARNING_BODY)?;
        Ok(renderer)
    }

    pub fn register(&mut self, path: &str, body: &str) -> Result<(), ApiError> {
        self.tera.add_raw_template(path, body).map_err(template_error)
    }

    /// Registers every file of `dir` as `templates/<file name>`.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, ApiError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .map_err(|e| ApiError::InternalServerError(format!("Cannot read template dir {}: {}", dir.display(), e)))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry
                .map_err(|e| ApiError::InternalServerError(e.to_string()))?
                .path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let body = fs::read_to_string(&path)
                .map_err(|e| ApiError::InternalServerError(format!("Cannot read template {}: {}", path.display(), e)))?;
            self.register(&format!("templates/{}", file_name), &body)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn render_template(&self, path: &str, params: &Map<String, Value>) -> Result<String, ApiError> {
        if !self.tera.get_template_names().any(|name| name == path) {
            return Err(ApiError::NotFound(format!("Template {} is not registered", path)));
        }

        let context = Context::from_value(Value::Object(params.clone())).map_err(template_error)?;
        self.tera.render(path, &context).map_err(template_error)
    }

    pub fn render(&self, info: &EmailInfo) -> Result<Email, ApiError> {
        Ok(Email {
            to: info.recipient.clone(),
            subject: info.subject.clone(),
            text_body: self.render_template(&info.template_path, &info.params)?,
        })
    }
}
