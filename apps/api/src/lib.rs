//! SEO Prompter API Library
//!
//! Local companion service for the SEO prompt board: the prompt catalog,
//! placeholder resolution, streamed Gemini responses, settings and
//! localized UI text, exposed over HTTP.

pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod infrastructure;
pub mod services;
