//! Email envelope

use std::fmt;

/// The sending identity of an email
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender {
    /// The display name, e.g. `Luxury Disney Interior Team`
    pub name: String,

    /// The sender's email address
    pub address: String,
}

impl Sender {
    /// Creates a new sender
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" <{}>", self.name, self.address)
    }
}

/// The body of an email
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// An HTML body
    Html(String),

    /// A plain text body
    Text(String),
}

impl Body {
    /// The raw content of the body
    pub fn content(&self) -> &str {
        match self {
            Body::Html(content) | Body::Text(content) => content,
        }
    }
}

/// Everything the transport needs to send one message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Who the email is from
    pub from: Sender,

    /// The recipient's address
    pub to: String,

    /// Where replies should go, if not to the sender
    pub reply_to: Option<String>,

    /// The subject line
    pub subject: String,

    /// The message body
    pub body: Body,
}
