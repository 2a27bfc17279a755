// Application services
// Orchestrate the domain types, the ports and the session state behind the API

pub mod accumulator;
pub mod board;
pub mod copy;
pub mod locale;
pub mod notifier;
pub mod rendering;
pub mod settings;

pub use accumulator::{CardUpdate, ResponseAccumulator, RunHandle, RunOutcome};
pub use board::{Board, CardView};
pub use copy::{CopyOutcome, CopyService};
pub use locale::LocaleService;
pub use notifier::{Notice, Notifier};
pub use settings::SettingsService;
