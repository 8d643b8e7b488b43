pub mod error;
pub mod types;

// Re-export for convenience
pub use error::{AppError, AppResult};
