//! Wordmark: a random word with its definitions, and a short history of the
//! words shown, kept entirely in a client-held cookie.

pub mod api;
pub mod client;
pub mod config;
pub mod history;
pub mod models;
pub mod provider;
