pub mod messaging_guard;
pub mod messaging_policy;

pub use messaging_guard::MessagingGuard;
pub use messaging_policy::{can_message, MessagingPolicy};
