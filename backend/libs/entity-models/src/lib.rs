//! Boundary types for the VarsityHub entity API.
//!
//! The entity API hands back loosely-typed JSON documents. Everything that
//! crosses into ranking or messaging logic is first mapped onto the validated
//! structs in this crate, with a defined default for every optional field.

pub mod age;
pub mod api;
pub mod error;
pub mod interaction;
pub mod post;
pub mod store;
pub mod user;

mod serde_utils;

pub use age::{age_on, AgeGroup};
pub use api::{EntityApi, PostFilter};
pub use error::{ModelError, Result};
pub use interaction::UserInteraction;
pub use post::{Post, PostType};
pub use store::{EntitySnapshot, InMemoryEntityStore};
pub use user::{UserProfile, UserRole};
