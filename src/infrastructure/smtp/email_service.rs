use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use std::error::Error;
use lettre::{AsyncSmtpTransport, Tokio1Executor, AsyncTransport};

use crate::domain::email::model::Email;
use crate::domain::email::service::EmailService;
use crate::utils::errors::ApiError;

type SmtpResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Clone)]
pub struct SmtpEmailService {
    username: String,
    from_name: String,
    mailer: AsyncSmtpTransport<Tokio1Executor>
}

impl SmtpEmailService {

    pub fn new(smtp_server: &str, username: &str, password: &str, from_name: &str) -> Result<Self, ApiError> {
        let credentials = Credentials::new(username.to_string(), password.to_string());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to create SMTP transport: {}", e)))?
            .credentials(credentials)
            .build();
        Ok(SmtpEmailService {
            username: username.to_string(),
            from_name: from_name.to_string(),
            mailer
        })
    }

    fn build_message(&self, email: &Email) -> SmtpResult<Message> {
        let message = Message::builder()
            .from(format!("{} <{}>", self.from_name, self.username).parse::<Mailbox>()?)
            .to(format!("<{}>", email.to).parse::<Mailbox>()?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone())?;
        Ok(message)
    }

    async fn send_email_internal(&self, email: &Email) -> SmtpResult<()> {
        let message = self.build_message(email)?;
        self.mailer.send(message).await?;
        Ok(())
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {

    async fn send_email(&self, email: &Email) -> Result<(), ApiError> {
        self.send_email_internal(email)
            .await
            .map_err(|e| ApiError::InternalServerError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SmtpEmailService {
        SmtpEmailService::new("smtp.example.com", "clinic@example.com", "secret", "Pet Clinic").unwrap()
    }

    fn email(to: &str) -> Email {
        Email {
            to: to.to_string(),
            subject: "Warning about Rabies in the Area of Springfield".to_string(),
            text_body: "Dear Jane Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_build_message_sets_headers_and_body() {
        let message = service().build_message(&email("jane@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("clinic@example.com"));
        assert!(raw.contains("To: <jane@example.com>") || raw.contains("To: jane@example.com"));
        assert!(raw.contains("Subject: Warning about Rabies in the Area of Springfield"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("Dear Jane Doe"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected() {
        let result = service().build_message(&email("not an address"));

        assert!(result.is_err());
    }
}
