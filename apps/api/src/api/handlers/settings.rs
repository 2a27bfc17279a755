use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;

use crate::api::state::AppState;
use crate::domain::variables::{GlobalVariables, GLOBAL_KEYS};

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// Names the settings form offers, in form order
    pub keys: Vec<&'static str>,
    pub values: GlobalVariables,
}

impl From<&GlobalVariables> for SettingsResponse {
    fn from(values: &GlobalVariables) -> Self {
        Self {
            keys: GLOBAL_KEYS.to_vec(),
            values: values.clone(),
        }
    }
}

/// Get the global variables
///
/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(SettingsResponse::from(state.settings.snapshot().as_ref()))
}

/// Replace the global variables
///
/// PUT /api/settings
///
/// The body replaces the whole set; unknown names are dropped.
pub async fn save_settings(
    State(state): State<AppState>,
    Json(values): Json<HashMap<String, String>>,
) -> Json<SettingsResponse> {
    let saved = state.settings.save(values);
    Json(SettingsResponse::from(saved.as_ref()))
}
