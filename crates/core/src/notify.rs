//! Notification-dispatcher seam.
//!
//! The intake pipeline announces new leads through
//! [`NotificationDispatcher`], injected at construction time. The SMTP
//! implementation lives in `medifab-notify`; [`NoopDispatcher`] covers
//! deployments with no mail provider configured.

use async_trait::async_trait;

use crate::lead::Lead;

/// Which of the two per-submission messages is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Full lead details, sent to the fixed admin address.
    AdminAlert,
    /// Short acknowledgement, sent back to the submitter.
    Confirmation,
}

/// A notification-delivery failure. Always caught and logged by the
/// caller, never propagated to the submitting request.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct NotifyError(pub String);

/// Best-effort outbound notification channel.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        kind: NotificationKind,
        recipient: &str,
        lead: &Lead,
    ) -> Result<(), NotifyError>;
}

/// Dispatcher used when email is not configured: logs and succeeds.
#[derive(Debug, Default)]
pub struct NoopDispatcher;

#[async_trait]
impl NotificationDispatcher for NoopDispatcher {
    async fn dispatch(
        &self,
        kind: NotificationKind,
        recipient: &str,
        lead: &Lead,
    ) -> Result<(), NotifyError> {
        tracing::debug!(
            ?kind,
            recipient,
            lead_id = lead.id,
            "Email not configured, skipping notification"
        );
        Ok(())
    }
}
