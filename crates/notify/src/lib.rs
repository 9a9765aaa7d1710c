//! SMTP notification delivery.
//!
//! [`SmtpDispatcher`] implements the core [`NotificationDispatcher`] trait
//! over the `lettre` async SMTP transport. Configuration is loaded from
//! environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and the caller should fall back
//! to the core no-op dispatcher.

mod templates;

use async_trait::async_trait;

use medifab_core::lead::Lead;
use medifab_core::notify::{NotificationDispatcher, NotificationKind, NotifyError};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@medifab.local";

/// Configuration for the SMTP dispatcher.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and lead notifications should no-op.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | yes      | -                        |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_FROM`     | no       | `noreply@medifab.local`  |
    /// | `SMTP_USER`     | no       | -                        |
    /// | `SMTP_PASSWORD` | no       | -                        |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// SmtpDispatcher
// ---------------------------------------------------------------------------

/// Sends lead notification emails via SMTP.
pub struct SmtpDispatcher {
    config: EmailConfig,
}

impl SmtpDispatcher {
    /// Create a new SMTP dispatcher with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    async fn deliver(
        &self,
        to_email: &str,
        subject: String,
        body: String,
    ) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = to_email, "Notification email sent");
        Ok(())
    }
}

#[async_trait]
impl NotificationDispatcher for SmtpDispatcher {
    async fn dispatch(
        &self,
        kind: NotificationKind,
        recipient: &str,
        lead: &Lead,
    ) -> Result<(), NotifyError> {
        let (subject, body) = match kind {
            NotificationKind::AdminAlert => templates::admin_alert(lead),
            NotificationKind::Confirmation => templates::confirmation(lead),
        };

        self.deliver(recipient, subject, body)
            .await
            .map_err(|e| NotifyError(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
