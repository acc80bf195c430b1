//! Game rules.
//!
//! The rules are methods on `GameState`, split by concern:
//! - `turn`: match setup, turn lifecycle, mana and drawing
//! - `play`: playing wizards, permanents and instants
//! - `combat`: attacks and base damage
//! - `damage`: combatant lookup, mitigation and HP changes
//! - `pending`: the pending-target prompt and its resolution
//! - `activation`: activated permanents and permanent removal
//!
//! Card-specific side effects live in `crate::effects`.

pub mod constants;
pub mod pending;

mod activation;
mod combat;
mod damage;
mod play;
mod turn;

pub use pending::Await;
