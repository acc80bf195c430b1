//! Card-effect tuning values.

/// Extra damage dealt by a creature bearing Enhancius.
pub const ENHANCIUS_BONUS: i64 = 1;

/// Max HP gained by a creature bearing Vitalius.
pub const VITALIUS_MAX_HP_BONUS: i64 = 2;

/// HP restored when Vitalius attaches.
pub const VITALIUS_HEAL: i64 = 2;

/// Dragon Breath damage.
pub const DRAGONIUS_DAMAGE: i64 = 3;

/// HP of a freshly summoned dragon.
pub const DRAGONIUS_HP: i64 = 3;

/// Meteorus damage to its random target.
pub const METEORUS_DAMAGE: i64 = 1;

/// Dracus Pyrio damage.
pub const DRACUS_PYRIO_DAMAGE: i64 = 7;

/// Pyrus Balio damage.
pub const PYRUS_BALIO_DAMAGE: i64 = 1;

/// Angeli Dustio healing.
pub const ANGELI_DUSTIO_HEAL: i64 = 2;

/// Damage Mortius deals to the killer of its bearer.
pub const MORTIUS_DAMAGE: i64 = 2;

/// HP the Magician loses on its recoil vanish.
pub const DISAPPEAR_RECOIL: i64 = 2;

/// Damage Mortician's first attack deals to each ally.
pub const ALLY_RECOIL: i64 = 1;

/// Damage the Pyromancer's second attack deals to every enemy creature.
pub const SPLASH_ALL_DAMAGE: i64 = 1;

/// Cards in hand per point of damage-per-card bonus.
pub const CARDS_PER_DAMAGE: i64 = 2;

/// Damage removed by resistance.
pub const RESISTANCE_REDUCTION: i64 = 1;

/// Damage removed by Armorius.
pub const ARMORIUS_REDUCTION: i64 = 1;

/// Discount on the next card after Conjurer's second attack.
pub const SPELL_DISCOUNT: i64 = 1;

/// Cards Dralio draws.
pub const DRALIO_DRAWS: usize = 2;
