//! Card system: definitions, names, catalog and creature instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (HP or cost, attacks, text)
//! - `CardName`: The cards the rules know how to play
//! - `CardCatalog`: Card definition lookup
//! - `Wizard`: A creature in play

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod names;

pub use catalog::CardCatalog;
pub use definition::{Attack, AttackEffect, CardCategory, CardDefinition, CardId};
pub use instance::{Wizard, REPEAT_ATTACK_SLOT};
pub use names::CardName;
