// Member Migration - Core Library
// Exposes all modules for use in the CLI and tests

pub mod config;
pub mod export;
pub mod member;
pub mod migration;
pub mod parser;
pub mod rules;

// Re-export commonly used types
pub use config::{MigrationConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use export::write_members_json;
pub use member::{columns, transform_row, MigratedMember, SkipReason, ID_OFFSET};
pub use migration::{migrate_rows, run_migration, MigrationReport};
pub use parser::{load_rows, Row};
pub use rules::{
    branch_from_text, credits_from_text, phone_last4, Branch, UNLIMITED_CREDITS,
};
