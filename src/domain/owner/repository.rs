use std::sync::Arc;

use async_trait::async_trait;
use crate::{domain::{owner::model::Owner, view::View}, utils::errors::ApiError};

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Fetches a fresh snapshot of `owner`. Yields `None` when the owner has
    /// no id or no longer exists.
    async fn reload(&self, owner: &Owner, view: View) -> Result<Option<Owner>, ApiError>;
}

#[async_trait]
impl<T: OwnerRepository + ?Sized> OwnerRepository for Arc<T> {
    async fn reload(&self, owner: &Owner, view: View) -> Result<Option<Owner>, ApiError> {
        (**self).reload(owner, view).await
    }
}
