// Streaming response accumulator
// Drives one generation task per card and keeps every buffer change persisted

use futures::StreamExt;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::ports::TextGenerator;
use crate::domain::prompt::{PromptId, ResolvedPrompt};
use crate::domain::repositories::storage_keys;
use crate::domain::run::{CardRun, RunEvent, RunSnapshot};
use crate::errors::{PrompterError, PrompterResult};
use crate::infrastructure::persistence::PersistenceAdapter;

const UPDATE_CHANNEL_CAPACITY: usize = 256;

/// Pushed to listeners after every change of a card's run state
#[derive(Debug, Clone, Serialize)]
pub struct CardUpdate {
    pub event: RunEvent,
    pub card: RunSnapshot,
}

/// How a run task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed(String),
    /// The run was cancelled or cleared; late fragments were dropped
    Cancelled,
}

/// Handle to a spawned run
pub struct RunHandle {
    pub run_id: Uuid,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    /// Waits for the run task to finish
    pub async fn wait(self) -> RunOutcome {
        self.task
            .await
            .unwrap_or_else(|e| RunOutcome::Failed(format!("Run task aborted: {}", e)))
    }
}

/// Every card's response as of one state change
struct PendingWrite {
    version: u64,
    responses: HashMap<u32, String>,
}

pub struct ResponseAccumulator {
    generator: Arc<dyn TextGenerator>,
    persistence: Arc<PersistenceAdapter>,
    cards: Mutex<HashMap<PromptId, CardRun>>,
    updates: broadcast::Sender<CardUpdate>,
    captured_version: AtomicU64,
    written_version: Arc<std::sync::Mutex<u64>>,
}

impl ResponseAccumulator {
    /// Creates the accumulator, restoring responses saved by an earlier session
    pub fn new(generator: Arc<dyn TextGenerator>, persistence: Arc<PersistenceAdapter>) -> Self {
        let saved: HashMap<u32, String> = persistence
            .get(storage_keys::RESPONSES)
            .unwrap_or_default();

        let cards = saved
            .into_iter()
            .filter_map(|(raw_id, response)| {
                PromptId::new(raw_id)
                    .ok()
                    .map(|id| (id, CardRun::restore(id, response)))
            })
            .collect::<HashMap<_, _>>();

        debug!(restored = cards.len(), "Restored saved responses");

        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);

        Self {
            generator,
            persistence,
            cards: Mutex::new(cards),
            updates,
            captured_version: AtomicU64::new(0),
            written_version: Arc::new(std::sync::Mutex::new(0)),
        }
    }

    /// Starts a run for the card and spawns the task that consumes the stream
    ///
    /// # Returns
    /// * `Err(UnresolvedPlaceholders)` - Nothing is sent and the buffer is kept
    /// * `Err(AlreadyRunning)` - The active run continues untouched
    pub async fn start(
        self: &Arc<Self>,
        prompt_id: PromptId,
        prompt: &ResolvedPrompt,
    ) -> PrompterResult<RunHandle> {
        let (run_id, pending) = {
            let mut cards = self.cards.lock().await;
            let card = cards
                .entry(prompt_id)
                .or_insert_with(|| CardRun::new(prompt_id));
            let (event, run_id) = card.start(prompt)?;
            let snapshot = card.snapshot();
            let pending = self.capture(&cards);
            self.publish(event, snapshot);
            (run_id, pending)
        };
        self.persist(pending).await;

        info!(%prompt_id, %run_id, "Run started");

        let accumulator = Arc::clone(self);
        let text = prompt.text().to_string();
        let task = tokio::spawn(async move { accumulator.drive(prompt_id, run_id, text).await });

        Ok(RunHandle { run_id, task })
    }

    async fn drive(&self, prompt_id: PromptId, run_id: Uuid, prompt: String) -> RunOutcome {
        let mut stream = match self.generator.stream_generate(&prompt).await {
            Ok(stream) => stream,
            Err(e) => return self.fail(prompt_id, run_id, e).await,
        };

        while let Some(item) = stream.next().await {
            match item {
                Ok(fragment) => {
                    let applied = self
                        .apply(prompt_id, |card| card.append(run_id, &fragment))
                        .await;
                    if !applied {
                        debug!(%prompt_id, %run_id, "Run no longer active, dropping stream");
                        return RunOutcome::Cancelled;
                    }
                }
                Err(e) => return self.fail(prompt_id, run_id, e).await,
            }
        }

        if self.apply(prompt_id, |card| card.complete(run_id)).await {
            info!(%prompt_id, %run_id, "Run completed");
            RunOutcome::Completed
        } else {
            RunOutcome::Cancelled
        }
    }

    async fn fail(&self, prompt_id: PromptId, run_id: Uuid, error: PrompterError) -> RunOutcome {
        let reason = match error {
            PrompterError::GenerationFailed(message) => message,
            other => other.to_string(),
        };

        if self
            .apply(prompt_id, |card| card.fail(run_id, reason.clone()))
            .await
        {
            warn!(%prompt_id, %run_id, error = %reason, "Run failed");
            RunOutcome::Failed(reason)
        } else {
            RunOutcome::Cancelled
        }
    }

    /// Cancels the card's active run
    ///
    /// Returns false when the card was not running.
    pub async fn cancel(&self, prompt_id: PromptId) -> bool {
        let cancelled = self.apply(prompt_id, CardRun::cancel).await;
        if cancelled {
            info!(%prompt_id, "Run cancelled");
        }
        cancelled
    }

    /// Empties the card's response and error from any state
    pub async fn clear(&self, prompt_id: PromptId) -> RunSnapshot {
        let mut cards = self.cards.lock().await;
        let card = cards
            .entry(prompt_id)
            .or_insert_with(|| CardRun::new(prompt_id));
        let event = card.clear();
        let snapshot = card.snapshot();
        let pending = self.capture(&cards);
        self.publish(event, snapshot.clone());
        drop(cards);

        self.persist(pending).await;
        snapshot
    }

    pub async fn snapshot(&self, prompt_id: PromptId) -> RunSnapshot {
        let cards = self.cards.lock().await;
        match cards.get(&prompt_id) {
            Some(card) => card.snapshot(),
            None => CardRun::new(prompt_id).snapshot(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CardUpdate> {
        self.updates.subscribe()
    }

    /// Applies one state-machine step; persists and publishes when it produced an event
    async fn apply<F>(&self, prompt_id: PromptId, step: F) -> bool
    where
        F: FnOnce(&mut CardRun) -> Option<RunEvent>,
    {
        let mut cards = self.cards.lock().await;
        let Some(card) = cards.get_mut(&prompt_id) else {
            return false;
        };
        let Some(event) = step(card) else {
            return false;
        };
        let snapshot = card.snapshot();
        let pending = self.capture(&cards);
        self.publish(event, snapshot);
        drop(cards);

        self.persist(pending).await;
        true
    }

    /// Takes a numbered copy of every response; called with the cards lock held
    fn capture(&self, cards: &HashMap<PromptId, CardRun>) -> PendingWrite {
        PendingWrite {
            version: self.captured_version.fetch_add(1, Ordering::Relaxed) + 1,
            responses: cards
                .iter()
                .map(|(id, card)| (id.value(), card.response().to_string()))
                .collect(),
        }
    }

    /// Saves a captured state on the blocking pool
    ///
    /// Writes of different cards may race once the cards lock is released; a
    /// capture older than the one already on disk is skipped.
    async fn persist(&self, pending: PendingWrite) {
        let persistence = Arc::clone(&self.persistence);
        let written_version = Arc::clone(&self.written_version);

        let write = tokio::task::spawn_blocking(move || {
            let mut written = written_version
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if pending.version <= *written {
                return;
            }
            persistence.set(storage_keys::RESPONSES, &pending.responses);
            *written = pending.version;
        });

        if let Err(e) = write.await {
            warn!(error = %e, "Saving responses was interrupted");
        }
    }

    fn publish(&self, event: RunEvent, card: RunSnapshot) {
        // No subscribers is fine
        let _ = self.updates.send(CardUpdate { event, card });
    }
}
