use std::time::Duration;

use nexbound_core::config::MockBackendSettings;
use nexbound_core::error::{NexboundError, Result};
use nexbound_core::user::{AuthService, UserProfile};

use super::fixtures;

/// Accepts any email except those containing `"error"`.
#[derive(Debug, Clone)]
pub struct MockAuthService {
    login_delay: Duration,
    logout_delay: Duration,
}

impl MockAuthService {
    pub fn new(settings: &MockBackendSettings) -> Self {
        Self {
            login_delay: settings.login_delay(),
            logout_delay: settings.logout_delay(),
        }
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(&MockBackendSettings::default())
    }
}

#[async_trait::async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str) -> Result<UserProfile> {
        tokio::time::sleep(self.login_delay).await;
        if email.contains("error") {
            tracing::debug!("[MockAuth] Rejecting login");
            return Err(NexboundError::authentication("Invalid credentials"));
        }
        Ok(fixtures::mock_user())
    }

    async fn logout(&self) -> Result<()> {
        tokio::time::sleep(self.logout_delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_login_returns_mock_profile() {
        let service = MockAuthService::default();
        let started = tokio::time::Instant::now();

        let user = service.login("demo@nexbound.io").await.unwrap();

        assert_eq!(user.id, "u_123");
        assert_eq!(user.name, "Alex Growth");
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[derive(Clone, Default)]
    struct SharedLogBuffer {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedLogBuffer {
        type Writer = SharedLogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Write for SharedLogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_rejects_error_emails() {
        let logs = SharedLogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = MockAuthService::default();
        let err = service.login("error@x.com").await.unwrap_err();
        assert!(err.is_authentication());

        let output = String::from_utf8(logs.buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("[MockAuth] Rejecting login"));
        assert!(!output.contains("error@x.com"));
    }
}
