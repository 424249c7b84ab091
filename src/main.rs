use std::sync::Arc;

use petclinic_service::{api::state::AppState, infrastructure::{database::mongo_context::MongoContext, i18n::message_bundle::MessageBundle, mongodb::{owner_repository::MongoOwnerRepository, pet_repository::MongoPetRepository}, smtp::{email_service::SmtpEmailService, mail_queue::{MailQueue, MailWorker}}, templates::renderer::TemplateRenderer}, routes::api_routes, utils::{config::AppConfig, errors::ApiError}};
use actix_web::{web, App, HttpServer};
use log::{error, info};

fn or_exit<T>(result: Result<T, ApiError>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("{}: {}", what, e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = or_exit(AppConfig::global(), "Invalid configuration");

    let email_service = or_exit(
        SmtpEmailService::new(
            &config.smtp_server,
            &config.smtp_username,
            &config.smtp_password,
            &config.mail_from_name
        ),
        "Failed to create email service"
    );

    let mut renderer = or_exit(TemplateRenderer::new(), "Failed to load built-in mail templates");
    if let Some(dir) = &config.template_dir {
        let loaded = or_exit(renderer.load_dir(dir), "Failed to load mail templates");
        info!("Loaded {} mail template(s) from {}", loaded, dir);
    }

    let messages = match &config.messages_path {
        Some(path) => or_exit(MessageBundle::load(path), "Failed to load messages"),
        None => MessageBundle::builtin(),
    };

    let mongo_context = or_exit(
        MongoContext::init(&config.database_url, &config.database_name).await,
        "Failed to connect to MongoDB"
    );

    let (mail_queue, inbox) = MailQueue::channel();
    tokio::spawn(MailWorker::new(inbox, renderer, Arc::new(email_service)).run());

    let app_state = AppState {
        pets: Arc::new(MongoPetRepository::new(&mongo_context)),
        owners: Arc::new(MongoOwnerRepository::new(&mongo_context)),
        mail_queue: Arc::new(mail_queue),
        messages: Arc::new(messages)
    };

    info!("Server running at http://{}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(api_routes)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
