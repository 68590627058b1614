use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ContactError, ContactReceipt, ContactSubmission, SENT_MESSAGE};
use super::relay::ContactRelay;

/// Validates contact submissions and hands them to the configured relay.
pub struct ContactService<R> {
    relay: Arc<R>,
}

impl<R> ContactService<R>
where
    R: ContactRelay + 'static,
{
    pub fn new(relay: Arc<R>) -> Self {
        Self { relay }
    }

    pub async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactReceipt, ContactError> {
        let submission = submission.validated()?;

        if let Err(err) = self.relay.relay(&submission).await {
            warn!(error = %err, subject = %submission.subject, "contact relay failed");
            return Err(err.into());
        }

        info!(subject = %submission.subject, "contact message relayed");
        Ok(ContactReceipt {
            message: SENT_MESSAGE,
            submitted_at: Utc::now(),
        })
    }
}
