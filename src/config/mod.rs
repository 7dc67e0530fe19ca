// Re-export all items from the submodules
mod rule_set;
mod run_config;

pub use rule_set::RuleSet;

pub use run_config::{
    AccessDeniedPolicy,
    RunConfig,
};
