//! HTTP client for the user-listing endpoint and its response models

pub mod client;
pub mod models;
