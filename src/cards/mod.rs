//! Card data: the Major Arcana library, spread positions and drawing.

pub mod images;
mod library;

use crate::engine::{OracleError, Result};
use library::MAJOR_ARCANA;
use rand::seq::{index, SliceRandom};
use rand::Rng;

#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    pub name: &'static str,
    pub archetype: &'static str,
    /// Long-form meaning used by the local template.
    pub gnostic: &'static str,
    pub keywords: &'static [&'static str],
    pub advice: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const POSITIONS: [Position; 3] = [
    Position {
        name: "THE ORIGIN",
        desc: "The Source Code / Past",
    },
    Position {
        name: "THE CONFLICT",
        desc: "The Glitch / Present",
    },
    Position {
        name: "THE HORIZON",
        desc: "Computed Output / Future",
    },
];

pub fn all() -> &'static [Card] {
    &MAJOR_ARCANA
}

pub fn names() -> impl Iterator<Item = &'static str> {
    MAJOR_ARCANA.iter().map(|card| card.name)
}

/// Exact-name lookup.
pub fn lookup(name: &str) -> Option<&'static Card> {
    MAJOR_ARCANA.iter().find(|card| card.name == name)
}

/// Three validated, distinct cards in origin / conflict / horizon order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    cards: [&'static Card; 3],
}

impl Spread {
    pub fn from_names(names: [&str; 3]) -> Result<Self> {
        let mut cards = [&MAJOR_ARCANA[0]; 3];
        for (slot, name) in cards.iter_mut().zip(names) {
            *slot = lookup(name).ok_or_else(|| OracleError::UnknownCard(name.to_string()))?;
        }

        if cards[0] == cards[1] || cards[0] == cards[2] {
            return Err(OracleError::DuplicateCard(cards[0].name.to_string()));
        }
        if cards[1] == cards[2] {
            return Err(OracleError::DuplicateCard(cards[1].name.to_string()));
        }

        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[&'static Card; 3] {
        &self.cards
    }

    pub fn names(&self) -> [&'static str; 3] {
        self.cards.map(|card| card.name)
    }

    pub fn origin(&self) -> &'static Card {
        self.cards[0]
    }

    pub fn conflict(&self) -> &'static Card {
        self.cards[1]
    }

    pub fn horizon(&self) -> &'static Card {
        self.cards[2]
    }

    /// Cards paired with their positions.
    pub fn slots(&self) -> impl Iterator<Item = (&'static Position, &'static Card)> + '_ {
        POSITIONS.iter().zip(self.cards.iter().copied())
    }
}

/// Samples three cards without replacement and validates them like any
/// named spread.
pub fn draw_spread<R>(rng: &mut R) -> Result<Spread>
where
    R: Rng + ?Sized,
{
    let picked = index::sample(rng, MAJOR_ARCANA.len(), 3);
    Spread::from_names([
        MAJOR_ARCANA[picked.index(0)].name,
        MAJOR_ARCANA[picked.index(1)].name,
        MAJOR_ARCANA[picked.index(2)].name,
    ])
}

pub fn random_card<R>(rng: &mut R) -> &'static Card
where
    R: Rng + ?Sized,
{
    MAJOR_ARCANA.choose(rng).unwrap_or(&MAJOR_ARCANA[0])
}
