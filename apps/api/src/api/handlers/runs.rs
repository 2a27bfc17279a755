use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::{self, Stream};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::errors::{PrompterError, PrompterResult};
use crate::services::rendering::{self, CodeBlock};
use crate::services::{CardView, CopyOutcome};

/// Response from starting a run
#[derive(Debug, Serialize)]
pub struct RunStartedResponse {
    pub run_id: Uuid,
    pub card: CardView,
}

/// Start streaming a response into the card
///
/// POST /api/prompts/:id/run
///
/// Returns 422 while placeholders are unresolved and 409 while a run is
/// already active; in both cases nothing is sent to the model.
pub async fn run_prompt(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<(StatusCode, Json<RunStartedResponse>), ApiError> {
    let prompt = state.prompt(id)?;
    let resolved = state.board.resolve(prompt, &state.settings.snapshot());

    let handle = match state.accumulator.start(prompt.id(), &resolved).await {
        Ok(handle) => handle,
        Err(PrompterError::UnresolvedPlaceholders(names)) => {
            debug!(prompt_id = id, missing = ?names, "Run refused, placeholders unresolved");
            let warning = state
                .locale
                .translator()
                .t("promptCard.fillVariablesWarning", &[]);
            state.notifier.show(warning.clone());
            state.board.expand(prompt.id());
            return Err(ApiError::unprocessable(warning));
        }
        Err(e) => return Err(e.into()),
    };

    state.board.expand(prompt.id());

    Ok((
        StatusCode::ACCEPTED,
        Json(RunStartedResponse {
            run_id: handle.run_id,
            card: state.card_view(prompt).await,
        }),
    ))
}

/// Stop the card's active run
///
/// POST /api/prompts/:id/cancel
pub async fn cancel_run(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    state.accumulator.cancel(prompt.id()).await;
    Ok(Json(state.card_view(prompt).await))
}

/// Clear the card's response and error
///
/// DELETE /api/prompts/:id/response
pub async fn clear_response(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CardView>, ApiError> {
    let prompt = state.prompt(id)?;
    state.accumulator.clear(prompt.id()).await;
    Ok(Json(state.card_view(prompt).await))
}

/// Copy the card's response text
///
/// POST /api/prompts/:id/response/copy
pub async fn copy_response(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CopyOutcome>, ApiError> {
    let prompt = state.prompt(id)?;
    let run = state.accumulator.snapshot(prompt.id()).await;

    Ok(Json(state.copier.copy(
        &run.response,
        "toast.responseCopied",
        state.locale.translator(),
    )))
}

/// List fenced code blocks in the card's response
///
/// GET /api/prompts/:id/response/code-blocks
pub async fn list_code_blocks(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<CodeBlock>>, ApiError> {
    let prompt = state.prompt(id)?;
    let run = state.accumulator.snapshot(prompt.id()).await;
    Ok(Json(rendering::code_blocks(&run.response)))
}

/// Copy one code block of the card's response
///
/// POST /api/prompts/:id/response/code-blocks/:index/copy
pub async fn copy_code_block(
    State(state): State<AppState>,
    Path((id, index)): Path<(u32, usize)>,
) -> Result<Json<CopyOutcome>, ApiError> {
    let prompt = state.prompt(id)?;
    let run = state.accumulator.snapshot(prompt.id()).await;
    let block = find_block(rendering::code_blocks(&run.response), index)?;

    Ok(Json(state.copier.copy(
        &block.code,
        "toast.codeCopied",
        state.locale.translator(),
    )))
}

fn find_block(blocks: Vec<CodeBlock>, index: usize) -> PrompterResult<CodeBlock> {
    blocks
        .into_iter()
        .nth(index)
        .ok_or(PrompterError::CodeBlockNotFound(index))
}

/// Stream the card's updates as server-sent events
///
/// GET /api/prompts/:id/events
pub async fn card_events(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let prompt_id = state.prompt(id)?.id();
    let updates = state.accumulator.subscribe();

    let events = stream::unfold(updates, move |mut updates| async move {
        loop {
            match updates.recv().await {
                Ok(update) if update.event.prompt_id() == prompt_id => {
                    let event = Event::default()
                        .event(update.event.event_type())
                        .json_data(&update);
                    return Some((event, updates));
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(%prompt_id, skipped, "Event listener lagged behind");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
