//! CloudWatch Logs adapter

pub mod client;

pub use client::CloudWatchLogsSource;
