use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::domain::ports::{Clipboard, TextGenerator};
use crate::domain::prompt::{PromptCatalog, PromptTemplate};
use crate::infrastructure::persistence::PersistenceAdapter;
use crate::services::{
    Board, CardView, CopyService, LocaleService, Notifier, ResponseAccumulator, SettingsService,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PromptCatalog>,
    pub accumulator: Arc<ResponseAccumulator>,
    pub board: Arc<Board>,
    pub settings: Arc<SettingsService>,
    pub locale: Arc<LocaleService>,
    pub copier: Arc<CopyService>,
    pub notifier: Notifier,
}

impl AppState {
    /// Wires the services over the given adapters, restoring saved state
    pub fn new(
        catalog: PromptCatalog,
        generator: Arc<dyn TextGenerator>,
        clipboard: Arc<dyn Clipboard>,
        persistence: Arc<PersistenceAdapter>,
    ) -> Self {
        let notifier = Notifier::new();

        Self {
            catalog: Arc::new(catalog),
            board: Arc::new(Board::new(&persistence)),
            settings: Arc::new(SettingsService::load(persistence.clone())),
            locale: Arc::new(LocaleService::load(persistence.clone())),
            accumulator: Arc::new(ResponseAccumulator::new(generator, persistence)),
            copier: Arc::new(CopyService::new(clipboard, notifier.clone())),
            notifier,
        }
    }

    /// Looks up a template by the id taken from the request path
    pub fn prompt(&self, raw_id: u32) -> Result<&PromptTemplate, ApiError> {
        Ok(self.catalog.find(raw_id)?)
    }

    /// Current view of one card in the active locale
    pub async fn card_view(&self, prompt: &PromptTemplate) -> CardView {
        let run = self.accumulator.snapshot(prompt.id()).await;
        self.board.view(
            prompt,
            self.locale.translator(),
            &self.settings.snapshot(),
            run,
        )
    }
}
