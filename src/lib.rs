//! # gist
//!
//! A CLI for instant article summaries, key takeaways and insights,
//! powered by the Gemini API.
//!
//! ## Features
//!
//! - **Fixed prompt contract**: asks the model for the source, a 2-3 paragraph
//!   summary, five key takeaways and one insight
//! - **Typed formatting**: classifies the free-text reply line by line into
//!   `ContentBlock`s for structured rendering
//! - **Mockable transport**: the Gemini call sits behind the `TextGenerator`
//!   trait, so the summarization flow is testable without a network

pub mod client;
pub mod config;
pub mod format;
pub mod ui;

pub use client::{GeminiGenerator, TextGenerator};
pub use config::Config;
pub use format::ContentBlock;
