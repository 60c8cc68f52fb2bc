//! HTTP client with retry support

mod client;

pub use client::{HttpClient, HttpClientBuilder};
