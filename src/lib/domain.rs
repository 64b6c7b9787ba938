//! Domain logic: inquiries and the mail they produce

pub mod communication;
pub mod inquiries;
