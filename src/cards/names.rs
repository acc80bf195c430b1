//! The known cards, by name.
//!
//! Rules code dispatches on `CardName`; catalog data only supplies stats and
//! text. A catalog entry whose id has no `CardName` can sit in a deck but
//! cannot be played.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Every card the rules know about, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardName {
    Librarian = 1,
    Magician,
    Shieldmancer,
    MindMage,
    Angel,
    Pyromancer,
    Bloodeater,
    Conjurer,
    Mortician,
    Protectio,
    PyrusBalio,
    Mortius,
    Enhancius,
    Dragonius,
    Cancelio,
    Conjorius,
    AngeliDustio,
    Vitalius,
    Dralio,
    Librarius,
    Aquarius,
    Bubublius,
    Meteorus,
    Armorius,
    DracusPyrio,
    Retrievio,
    Extractio,
}

impl CardName {
    /// All names in catalog order.
    pub const ALL: [CardName; 27] = [
        Self::Librarian,
        Self::Magician,
        Self::Shieldmancer,
        Self::MindMage,
        Self::Angel,
        Self::Pyromancer,
        Self::Bloodeater,
        Self::Conjurer,
        Self::Mortician,
        Self::Protectio,
        Self::PyrusBalio,
        Self::Mortius,
        Self::Enhancius,
        Self::Dragonius,
        Self::Cancelio,
        Self::Conjorius,
        Self::AngeliDustio,
        Self::Vitalius,
        Self::Dralio,
        Self::Librarius,
        Self::Aquarius,
        Self::Bubublius,
        Self::Meteorus,
        Self::Armorius,
        Self::DracusPyrio,
        Self::Retrievio,
        Self::Extractio,
    ];

    /// Name for a catalog id.
    ///
    /// ```
    /// use wizard_duel::cards::{CardId, CardName};
    ///
    /// assert_eq!(CardName::from_id(CardId::new(2)), Some(CardName::Magician));
    /// assert_eq!(CardName::from_id(CardId::new(0)), None);
    /// ```
    #[must_use]
    pub fn from_id(id: CardId) -> Option<Self> {
        let index = (id.raw() as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Catalog id of this card.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId::new(self as u32)
    }

    /// Printed name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Librarian => "Librarian",
            Self::Magician => "Magician",
            Self::Shieldmancer => "Shieldmancer",
            Self::MindMage => "MindMage",
            Self::Angel => "Angel",
            Self::Pyromancer => "Pyromancer",
            Self::Bloodeater => "Bloodeater",
            Self::Conjurer => "Conjurer",
            Self::Mortician => "Mortician",
            Self::Protectio => "Protectio",
            Self::PyrusBalio => "PyrusBalio",
            Self::Mortius => "Mortius",
            Self::Enhancius => "Enhancius",
            Self::Dragonius => "Dragonius",
            Self::Cancelio => "Cancelio",
            Self::Conjorius => "Conjorius",
            Self::AngeliDustio => "AngeliDustio",
            Self::Vitalius => "Vitalius",
            Self::Dralio => "Dralio",
            Self::Librarius => "Librarius",
            Self::Aquarius => "Aquarius",
            Self::Bubublius => "Bubublius",
            Self::Meteorus => "Meteorus",
            Self::Armorius => "Armorius",
            Self::DracusPyrio => "DracusPyrio",
            Self::Retrievio => "Retrievio",
            Self::Extractio => "Extractio",
        }
    }

    /// Permanents that bind to a creature when played.
    #[must_use]
    pub fn is_attachment(self) -> bool {
        matches!(
            self,
            Self::Mortius | Self::Enhancius | Self::Vitalius | Self::Bubublius | Self::Armorius
        )
    }

    /// Permanents whose effect is passive.
    #[must_use]
    pub fn is_passive(self) -> bool {
        matches!(self, Self::Aquarius | Self::Conjorius | Self::Librarius | Self::Meteorus)
    }

    /// Instants that prompt for a target.
    #[must_use]
    pub fn awaits_target(self) -> bool {
        matches!(
            self,
            Self::PyrusBalio
                | Self::Protectio
                | Self::Cancelio
                | Self::AngeliDustio
                | Self::DracusPyrio
                | Self::Retrievio
                | Self::Extractio
        )
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
