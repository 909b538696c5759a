//! Data models for the GameSaved application.
//!
//! These models match the mobile client's interfaces exactly for seamless interoperability.

mod game;
mod guild;
mod inventory;
mod party;
mod post;
mod profile;

pub use game::*;
pub use guild::*;
pub use inventory::*;
pub use party::*;
pub use post::*;
pub use profile::*;
