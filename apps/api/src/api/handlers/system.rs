use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::i18n::Locale;
use crate::services::Notice;

#[derive(Debug, Serialize)]
pub struct LocaleResponse {
    pub locale: Locale,
    pub available: Vec<Locale>,
}

impl From<Locale> for LocaleResponse {
    fn from(locale: Locale) -> Self {
        Self {
            locale,
            available: Locale::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub locale: Locale,
    pub messages: HashMap<&'static str, &'static str>,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Get the active language
///
/// GET /api/locale
pub async fn get_locale(State(state): State<AppState>) -> Json<LocaleResponse> {
    Json(LocaleResponse::from(state.locale.get()))
}

/// Set the active language
///
/// PUT /api/locale
pub async fn set_locale(
    State(state): State<AppState>,
    Json(req): Json<SetLocaleRequest>,
) -> Result<Json<LocaleResponse>, ApiError> {
    let locale = Locale::parse(&req.locale)
        .ok_or_else(|| ApiError::bad_request(format!("Unsupported locale: {}", req.locale)))?;

    Ok(Json(LocaleResponse::from(state.locale.set(locale))))
}

/// Switch between Slovak and English
///
/// POST /api/locale/toggle
pub async fn toggle_locale(State(state): State<AppState>) -> Json<LocaleResponse> {
    Json(LocaleResponse::from(state.locale.toggle()))
}

/// Every UI message in the active language
///
/// GET /api/messages
pub async fn get_messages(State(state): State<AppState>) -> Json<MessagesResponse> {
    let translator = state.locale.translator();
    Json(MessagesResponse {
        locale: translator.locale(),
        messages: translator.messages(),
    })
}

/// The toast currently on screen
///
/// GET /api/notice
pub async fn get_notice(State(state): State<AppState>) -> Json<Option<Notice>> {
    Json(state.notifier.current())
}
