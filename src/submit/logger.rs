//! Submit handler that only logs what it receives
//!
//! Stands in for a real user-creation backend. Nothing is persisted.

use super::traits::UserSubmitter;
use crate::state::CreateUserFormData;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Logs each submission after an optional delay
#[derive(Debug, Clone, Default)]
pub struct LogSubmitter {
    /// Simulated handler latency
    delay: Duration,
}

impl LogSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl UserSubmitter for LogSubmitter {
    async fn create_user(&self, values: CreateUserFormData) -> Result<()> {
        let submission_id = Uuid::new_v4();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        // Passwords stay out of the log
        tracing::info!(
            %submission_id,
            name = %values.name,
            email = %values.email,
            "create user submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> CreateUserFormData {
        CreateUserFormData {
            name: "Ana".to_string(),
            email: "ana@ex.com".to_string(),
            password: "abcdef".to_string(),
            password_confirmation: "abcdef".to_string(),
        }
    }

    #[test]
    fn test_default_has_no_delay() {
        assert!(LogSubmitter::default().delay().is_zero());
    }

    #[test]
    fn test_create_user_succeeds() {
        let submitter = LogSubmitter::default();
        let result = tokio_test::block_on(submitter.create_user(values()));
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_user_waits_for_delay() {
        let submitter = LogSubmitter::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        submitter.create_user(values()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let submitter: std::sync::Arc<dyn UserSubmitter> =
            std::sync::Arc::new(LogSubmitter::default());
        assert!(submitter.create_user(values()).await.is_ok());
    }
}
