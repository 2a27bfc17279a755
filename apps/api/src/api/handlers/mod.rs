// HTTP handlers, one module per resource

pub mod prompts;
pub mod runs;
pub mod settings;
pub mod system;
