use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

use crate::errors::{PrompterError, PrompterResult};
use crate::infrastructure::gemini::GeminiConfig;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STORE_PATH: &str = "prompter-store.json";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Runtime configuration read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub store_path: PathBuf,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Reads the configuration; call `dotenv::dotenv()` first to pick up `.env`
    pub fn from_env() -> PrompterResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PrompterResult<Self> {
        let addr = lookup("PROMPTER_ADDR").unwrap_or_else(|| {
            warn!("PROMPTER_ADDR not set, using default");
            DEFAULT_ADDR.to_string()
        });
        let addr = addr.parse().map_err(|e| {
            PrompterError::Config(format!("Invalid PROMPTER_ADDR '{}': {}", addr, e))
        })?;

        let store_path = lookup("PROMPTER_STORE_PATH").unwrap_or_else(|| {
            warn!("PROMPTER_STORE_PATH not set, using default");
            DEFAULT_STORE_PATH.to_string()
        });

        let api_key = lookup("API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("API_KEY not set, runs will fail until it is configured");
        }

        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            addr,
            store_path: PathBuf::from(store_path),
            gemini: GeminiConfig {
                api_key,
                model,
                api_base,
            },
        })
    }
}
