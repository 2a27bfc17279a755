use std::sync::{Arc, RwLock};
use tracing::info;

use crate::domain::repositories::storage_keys;
use crate::i18n::{Locale, Translator};
use crate::infrastructure::persistence::PersistenceAdapter;

/// Active UI language, persisted across sessions
pub struct LocaleService {
    current: RwLock<Locale>,
    persistence: Arc<PersistenceAdapter>,
}

impl LocaleService {
    /// Loads the saved language; anything unrecognised falls back to Slovak
    pub fn load(persistence: Arc<PersistenceAdapter>) -> Self {
        let locale = persistence
            .get::<String>(storage_keys::LOCALE)
            .and_then(|code| Locale::parse(&code))
            .unwrap_or_default();

        Self {
            current: RwLock::new(locale),
            persistence,
        }
    }

    pub fn get(&self) -> Locale {
        self.current
            .read()
            .map(|locale| *locale)
            .unwrap_or_default()
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.get())
    }

    pub fn set(&self, locale: Locale) -> Locale {
        if let Ok(mut current) = self.current.write() {
            *current = locale;
        }
        self.persistence.set(storage_keys::LOCALE, &locale.code());
        info!(%locale, "Language changed");
        locale
    }

    /// Switches between Slovak and English
    pub fn toggle(&self) -> Locale {
        self.set(self.get().toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::MemoryStore;

    fn persistence() -> Arc<PersistenceAdapter> {
        Arc::new(PersistenceAdapter::new(Arc::new(MemoryStore::new())))
    }

    #[test]
    fn defaults_to_slovak() {
        assert_eq!(LocaleService::load(persistence()).get(), Locale::Sk);
    }

    #[test]
    fn toggle_persists_choice() {
        let persistence = persistence();
        let locale = LocaleService::load(persistence.clone());

        assert_eq!(locale.toggle(), Locale::En);
        assert_eq!(
            persistence.get::<String>(storage_keys::LOCALE).as_deref(),
            Some("en")
        );
        assert_eq!(LocaleService::load(persistence).get(), Locale::En);
    }

    #[test]
    fn garbage_saved_value_falls_back() {
        let persistence = persistence();
        persistence.set(storage_keys::LOCALE, &"klingon");
        assert_eq!(LocaleService::load(persistence).get(), Locale::Sk);
    }
}
