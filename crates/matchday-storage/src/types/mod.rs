//! Type definitions for matchday storage.

mod ids;
mod matches;
mod messages;
mod profiles;
mod sports;

// Re-export all types from submodules
pub use ids::*;
pub use matches::*;
pub use messages::*;
pub use profiles::*;
pub use sports::*;
