#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Inquiry mailer HTTP service

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use inquiry_mailer::{
    domain::inquiries::{InquiryServiceImpl, MailIdentity},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{
            state::{AppConfig, AppState},
            HttpServer, HttpServerConfig,
        },
    },
};
use tracing::info;

/// Who is notified and how the business is named in emails
#[derive(Debug, Parser)]
pub struct MailArgs {
    /// The address that receives admin notifications
    #[clap(long = "email-receiver", env = "EMAIL_RECEIVER")]
    pub admin_recipient: String,

    /// The business's display name
    #[clap(
        long = "company-name",
        env = "COMPANY_NAME",
        default_value = "Luxury Disney Interior"
    )]
    pub company_name: String,
}

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// Recipient and branding
    #[clap(flatten)]
    pub mail: MailArgs,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let identity = MailIdentity::new(
        &args.mail.company_name,
        args.smtp.sender_address(),
        &args.mail.admin_recipient,
    );

    info!(
        sender = %identity.sender,
        admin_recipient = %identity.admin_recipient,
        smtp_host = %args.smtp.host,
        "configured mailer"
    );

    let mailer = SMTPMailer::new(&args.smtp)?;

    let state = AppState::new(
        AppConfig {
            company_name: args.mail.company_name,
        },
        InquiryServiceImpl::new(Arc::new(mailer), identity),
    );

    HttpServer::new(state, args.server).await?.run().await
}
