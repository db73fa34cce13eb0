//! Wiring the client together from a loaded configuration.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::{SessionError, StartupError};
use crate::gateway::Gateway;
use crate::session::SessionStore;
use crate::state::UserContext;

use super::config::BlogConfig;

/// Everything a command needs.
pub struct BlogClient {
    pub config: BlogConfig,
    pub origin: url::Url,
    pub http: ReqwestHttpClient,
    pub gateway: Gateway,
    pub ctx: UserContext,
    pub session: SessionStore,
}

impl BlogClient {
    /// Build the HTTP client, restore the saved session cookie and create an
    /// empty user context. Nothing is sent to the API yet.
    pub fn bootstrap(config: BlogConfig) -> Result<Self, StartupError> {
        let origin = config.origin_url()?;
        let session = config.session_store()?;
        let http = ReqwestHttpClient::new()?;

        let restored = session.restore_into(&http.cookie_jar(), &origin)?;
        tracing::debug!(
            origin = %origin,
            session = %session.path().display(),
            restored,
            "client ready"
        );

        let gateway = Gateway::new(config.api_origin.clone(), Arc::new(http.clone()));
        let ctx = UserContext::new(config.update_policy);

        Ok(Self {
            config,
            origin,
            http,
            gateway,
            ctx,
            session,
        })
    }

    /// Write whatever cookie the jar now holds for the origin.
    pub fn persist_session(&self) -> Result<(), SessionError> {
        self.session
            .persist(&self.origin, self.http.cookie_header(&self.origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bootstrap_restores_cookie() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let config = BlogConfig::default().with_session_file(&path);
        let origin = config.origin_url().unwrap();
        SessionStore::new(&path)
            .persist(&origin, Some("connect.sid=abc".to_string()))
            .unwrap();

        let client = BlogClient::bootstrap(config).unwrap();

        assert_eq!(
            client.http.cookie_header(&client.origin).as_deref(),
            Some("connect.sid=abc")
        );
        assert!(!client.ctx.is_signed_in());
    }

    #[test]
    fn test_bootstrap_rejects_bad_origin() {
        let config = BlogConfig::default().with_api_origin("nope");
        assert!(matches!(
            BlogClient::bootstrap(config),
            Err(StartupError::Config(_))
        ));
    }

    #[test]
    fn test_persist_without_cookie_clears_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{}").unwrap();
        let client =
            BlogClient::bootstrap(BlogConfig::default().with_session_file(&path)).unwrap();

        client.persist_session().unwrap();

        assert!(!path.exists());
    }
}
