//! External system integrations for logship.
//!
//! This module provides adapters for the two managed services:
//!
//! - [`cloudwatch`] - CloudWatch Logs implementation of [`traits::LogSource`]
//! - [`s3`] - S3 implementation of [`traits::WatermarkStore`]
//! - [`aws`] - Shared SDK configuration loading
//!
//! # Design Pattern
//!
//! The orchestrator depends only on the narrow capability traits in
//! [`traits`]; the AWS clients implement them and convert every SDK
//! failure into a domain error at this boundary. Tests substitute
//! in-memory fakes for both traits.

pub mod aws;
pub mod cloudwatch;
pub mod s3;
pub mod traits;

pub use traits::{LogSource, WatermarkStore};
