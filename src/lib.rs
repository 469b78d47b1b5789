pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Command-line interface
pub mod config; // Environment-backed configuration
pub mod core; // Business logic

/// Support modules (used across layers)
pub mod api; // Shortener API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
