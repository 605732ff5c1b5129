// State management and watermark tracking

pub mod watermark;

pub use watermark::{Watermark, DEFAULT_KEY_PREFIX};
