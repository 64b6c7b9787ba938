//! SMTP email service implementation

use anyhow::Result;
use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::domain::communication::mailer::{Body, Envelope, Mailer, MailerError};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(
        id = "smtp_host",
        long = "smtp-host",
        env = "SMTP_HOST",
        default_value = "smtp.gmail.com"
    )]
    pub host: String,

    /// The SMTP port
    #[clap(id = "smtp_port", long = "smtp-port", env = "SMTP_PORT", default_value = "465")]
    pub port: u16,

    /// The SMTP username
    #[clap(long = "email-user", env = "EMAIL_USER")]
    pub username: String,

    /// The SMTP password (for Gmail, an app password)
    #[clap(long = "email-pass", env = "EMAIL_PASS", hide_env_values = true)]
    pub password: String,

    /// The sender email address, if different from the username
    #[clap(long = "email-from", env = "EMAIL_FROM")]
    pub sender: Option<String>,

    /// Verify the TLS certificate
    #[clap(
        long = "smtp-verify-tls",
        env = "SMTP_VERIFY_TLS",
        action = ArgAction::Set,
        default_value = "true"
    )]
    pub verify_tls: bool,

    /// Upgrade a plain connection with STARTTLS instead of connecting over TLS
    #[clap(
        long = "smtp-starttls",
        env = "SMTP_STARTTLS",
        action = ArgAction::Set,
        default_value = "false"
    )]
    pub starttls: bool,
}

impl SMTPConfig {
    /// The address emails are sent from
    pub fn sender_address(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.username)
    }
}

/// SMTP mailer
#[derive(Clone)]
pub struct SMTPMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl std::fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SMTPMailer").finish_non_exhaustive()
    }
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: &SMTPConfig) -> Result<Self> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let tls_parameters = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(!config.verify_tls)
            .build()?;

        let tls = if config.starttls {
            Tls::Required(tls_parameters)
        } else {
            Tls::Wrapper(tls_parameters)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .tls(tls)
            .credentials(creds)
            .build();

        Ok(Self { transport })
    }
}

/// Converts an [`Envelope`] into a MIME message
pub fn build_message(envelope: &Envelope) -> Result<Message, MailerError> {
    let from = Mailbox::new(
        Some(envelope.from.name.clone()),
        envelope.from.address.parse()?,
    );

    let mut builder = Message::builder()
        .from(from)
        .to(envelope.to.parse()?)
        .subject(envelope.subject.clone());

    if let Some(reply_to) = &envelope.reply_to {
        builder = builder.reply_to(reply_to.parse()?);
    }

    let content_type = match &envelope.body {
        Body::Html(_) => ContentType::TEXT_HTML,
        Body::Text(_) => ContentType::TEXT_PLAIN,
    };

    Ok(builder
        .header(content_type)
        .body(envelope.body.content().to_string())?)
}

#[async_trait]
impl Mailer for SMTPMailer {
    async fn send(&self, envelope: &Envelope) -> Result<(), MailerError> {
        let message = build_message(envelope)?;

        debug!(from = %envelope.from, to = %envelope.to, "sending email");

        self.transport.send(message).await?;

        Ok(())
    }
}
