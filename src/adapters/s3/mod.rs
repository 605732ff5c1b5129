//! S3 adapter

pub mod client;

pub use client::S3WatermarkStore;
