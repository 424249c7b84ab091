//! Fire-and-forget mail dispatch.
//!
//! [`MailQueue`] hands messages to an unbounded channel and returns at once.
//! A single [`MailWorker`] task drains the channel, renders each message and
//! sends it. Delivery failures are logged and never reach the sender.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::mpsc;

use crate::domain::email::model::EmailInfo;
use crate::domain::email::service::{EmailDispatcher, EmailService};
use crate::infrastructure::templates::renderer::TemplateRenderer;
use crate::utils::errors::ApiError;

pub type MailInbox = mpsc::UnboundedReceiver<EmailInfo>;

#[derive(Clone, Debug)]
pub struct MailQueue {
    tx: mpsc::UnboundedSender<EmailInfo>,
}

impl MailQueue {
    pub fn channel() -> (MailQueue, MailInbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (MailQueue { tx }, rx)
    }
}

impl EmailDispatcher for MailQueue {
    fn send_email_async(&self, email: EmailInfo) -> Result<(), ApiError> {
        self.tx.send(email).map_err(|e| {
            ApiError::InternalServerError(format!("Mail queue is closed, cannot send mail to {}", e.0.recipient))
        })
    }
}

pub struct MailWorker<S: EmailService> {
    inbox: MailInbox,
    renderer: TemplateRenderer,
    service: Arc<S>,
}

impl<S: EmailService> MailWorker<S> {
    pub fn new(inbox: MailInbox, renderer: TemplateRenderer, service: Arc<S>) -> Self {
        Self {
            inbox,
            renderer,
            service,
        }
    }

    /// Runs until every [`MailQueue`] handle has been dropped.
    pub async fn run(mut self) {
        while let Some(info) = self.inbox.recv().await {
            self.deliver(&info).await;
        }
        info!("Mail queue closed. Shutting down MailWorker.");
    }

    async fn deliver(&self, info: &EmailInfo) {
        let email = match self.renderer.render(info) {
            Ok(email) => email,
            Err(e) => {
                error!("Failed to render mail '{}' to {}: {}", info.subject, info.recipient, e);
                return;
            }
        };

        match self.service.send_email(&email).await {
            Ok(()) => debug!("Mail '{}' delivered to {}", email.subject, email.to),
            Err(e) => error!("Failed to send mail '{}' to {}: {}", email.subject, email.to, e),
        }
    }
}
