use metrics_exporter_prometheus::PrometheusHandle;
use portfolio_pricing::config::ContactConfig;
use portfolio_pricing::contact::{ContactRelay, ContactSubmission, FormRelayClient, RelayError};
use std::future::Future;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps contact messages in memory when no form relay is configured.
#[derive(Default, Clone)]
pub(crate) struct InMemoryContactOutbox {
    messages: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl ContactRelay for InMemoryContactOutbox {
    fn relay(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), RelayError>> + Send {
        let mut guard = self.messages.lock().expect("outbox mutex poisoned");
        guard.push(submission.clone());
        info!(queued = guard.len(), "contact message stored in local outbox");
        async { Ok(()) }
    }
}

impl InMemoryContactOutbox {
    #[cfg(test)]
    pub(crate) fn messages(&self) -> Vec<ContactSubmission> {
        self.messages.lock().expect("outbox mutex poisoned").clone()
    }
}

/// Relay chosen from configuration at startup.
pub(crate) enum ConfiguredRelay {
    Http(FormRelayClient),
    Outbox(InMemoryContactOutbox),
}

impl ConfiguredRelay {
    pub(crate) fn from_config(config: &ContactConfig) -> Result<Self, RelayError> {
        match &config.relay_url {
            Some(url) => Ok(Self::Http(FormRelayClient::new(
                url.clone(),
                config.relay_timeout,
            )?)),
            None => Ok(Self::Outbox(InMemoryContactOutbox::default())),
        }
    }

    pub(crate) fn describe(&self) -> &str {
        match self {
            Self::Http(client) => client.endpoint(),
            Self::Outbox(_) => "local outbox",
        }
    }
}

impl ContactRelay for ConfiguredRelay {
    fn relay(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), RelayError>> + Send {
        async move {
            match self {
                Self::Http(client) => client.relay(submission).await,
                Self::Outbox(outbox) => outbox.relay(submission).await,
            }
        }
    }
}
