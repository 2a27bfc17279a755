use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::prompt::filter_prompts;
use crate::services::{CardView, CopyOutcome};

/// Query string of the card list
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct PromptListResponse {
    pub visible: usize,
    pub total: usize,
    /// Localized "Showing: x / y" line
    pub count_label: String,
    pub cards: Vec<CardView>,
}

/// Request body for editing a card's variables
#[derive(Debug, Deserialize)]
pub struct UpdateVariablesRequest {
    pub values: HashMap<String, String>,
}

/// List cards, optionally filtered by a search term
///
/// GET /api/prompts?q=
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<PromptListResponse> {
    let translator = state.locale.translator();
    let prompts = filter_prompts(&state.catalog, translator.locale(), &query.q);

    let mut cards = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        cards.push(state.card_view(prompt).await);
    }

    let visible = cards.len().to_string();
    let total = state.catalog.len().to_string();
    let count_label = translator.t(
        "app.promptCount",
        &[("visible", visible.as_str()), ("total", total.as_str())],
    );

    Json(PromptListResponse {
        visible: cards.len(),
        total: state.catalog.len(),
        count_label,
        cards,
    })
}

/// Get one card
///
/// GET /api/prompts/:id
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    Ok(Json(state.card_view(prompt).await))
}

/// Store values typed into a card's variable form
///
/// PUT /api/prompts/:id/variables
pub async fn update_variables(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<UpdateVariablesRequest>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    state.board.update_values(prompt, req.values);
    Ok(Json(state.card_view(prompt).await))
}

/// Copy the card's prompt text, resolved or not
///
/// POST /api/prompts/:id/copy
pub async fn copy_prompt(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CopyOutcome>, ApiError> {
    let prompt = state.prompt(id)?;
    let resolved = state.board.resolve(prompt, &state.settings.snapshot());

    Ok(Json(state.copier.copy(
        resolved.text(),
        "toast.promptCopied",
        state.locale.translator(),
    )))
}

/// Clear the card's "new" badge
///
/// POST /api/prompts/:id/seen
pub async fn mark_seen(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    state.board.mark_seen(prompt.id());
    Ok(Json(state.card_view(prompt).await))
}

/// Expand or collapse the card
///
/// POST /api/prompts/:id/expand
pub async fn toggle_expanded(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    state.board.toggle_expanded(prompt.id());
    Ok(Json(state.card_view(prompt).await))
}
