//! Infrastructure: mail transport and HTTP server

pub mod email;
pub mod http;
