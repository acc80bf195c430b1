//! Card effects.
//!
//! - `attack`: what each attack does besides its damage
//! - `spell`: instants and attachments resolved through the pending prompt
//!
//! Both extend `GameState` and are driven from `crate::rules`.

mod attack;
mod spell;
