use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};

/// A mail request that still has to be rendered from a template.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmailInfo {
    pub recipient: String,
    pub subject: String,
    pub template_path: String,
    pub params: Map<String, Value>,
}

impl EmailInfo {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        template_path: impl Into<String>,
        params: Map<String, Value>,
    ) -> Self {
        EmailInfo {
            recipient: recipient.into(),
            subject: subject.into(),
            template_path: template_path.into(),
            params,
        }
    }
}

/// A rendered message, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub text_body: String,
}
