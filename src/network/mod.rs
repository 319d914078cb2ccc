//! Outbound HTTP to the upstream data provider

mod client;

pub use client::HttpClient;
