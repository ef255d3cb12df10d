pub mod config;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::PolicyConfig;
pub use error::{MessagingError, Result};
pub use models::{AllowReason, DenyReason, MessagingDecision};
pub use services::{can_message, MessagingGuard, MessagingPolicy};
