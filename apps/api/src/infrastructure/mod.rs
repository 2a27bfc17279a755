// Infrastructure layer module
// Contains storage adapters and external service integrations
// Follows Hexagonal Architecture

pub mod clipboard;
pub mod gemini;
pub mod persistence;
pub mod repositories;
