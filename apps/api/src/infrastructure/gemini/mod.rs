// Gemini streaming adapter for the TextGenerator port

pub mod client;
pub mod sse;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
