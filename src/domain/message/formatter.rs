use std::sync::Arc;

use crate::utils::errors::ApiError;

pub trait MessageFormatter: Send + Sync {
    /// Looks up `key` and substitutes `args` positionally.
    fn format_message(&self, key: &str, args: &[&str]) -> Result<String, ApiError>;
}

impl<T: MessageFormatter + ?Sized> MessageFormatter for Arc<T> {
    fn format_message(&self, key: &str, args: &[&str]) -> Result<String, ApiError> {
        (**self).format_message(key, args)
    }
}
