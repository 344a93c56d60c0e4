//! Trait abstraction for the submit handler to enable mocking in tests

use crate::state::CreateUserFormData;
use anyhow::Result;
use async_trait::async_trait;

/// Receives the record once the create-user form passes validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSubmitter: Send + Sync {
    /// Hand over a validated record
    async fn create_user(&self, values: CreateUserFormData) -> Result<()>;
}
