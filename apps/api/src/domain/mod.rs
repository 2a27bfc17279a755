// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod ports;
pub mod prompt;
pub mod repositories;
pub mod run;
pub mod variables;
