// Adapters - External system implementations

pub mod console_stdio;
pub mod process_tokio;
pub mod toml_config;

// Re-export adapters
pub use console_stdio::ConsoleAdapter;
pub use process_tokio::TokioProcessAdapter;
pub use toml_config::TomlConfigAdapter;
