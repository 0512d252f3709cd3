//! Packing list items and their identity

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identity of an [`Item`].
///
/// Assigned once at creation and never reused within a session. Toggle and
/// delete address items exclusively through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many of an item to pack. Always within `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);
    pub const MAX: Quantity = Quantity(20);

    /// Returns `None` when `n` falls outside `1..=20`.
    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&n).then_some(Self(n))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// One more, stopping at [`Quantity::MAX`].
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One fewer, stopping at [`Quantity::MIN`].
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Quantity::new(n).ok_or_else(|| format!("quantity must be between 1 and 20, got {n}"))
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

/// A single entry on the packing list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    /// New, not yet packed item
    pub fn new(id: ItemId, description: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with `packed` inverted
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }

    /// Row label: quantity followed by description
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

/// Hands out item ids from the wall clock in milliseconds.
///
/// Ids are strictly increasing: if the clock has not moved (two adds in the
/// same millisecond) or went backwards, the next id is `last + 1`.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time
    pub fn next_id(&mut self) -> ItemId {
        let now = chrono::Utc::now().timestamp_millis();
        self.next_id_at(u64::try_from(now).unwrap_or(0))
    }

    /// Next id given an explicit millisecond timestamp
    pub fn next_id_at(&mut self, now_ms: u64) -> ItemId {
        let raw = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(raw);
        ItemId(raw)
    }
}

/// A small starter list, handy for trying the UI out.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId(1),
            description: "Passports".to_string(),
            quantity: Quantity(1),
            packed: true,
        },
        Item::new(ItemId(2), "Socks", Quantity(4)),
        Item::new(ItemId(3), "charger", Quantity(1)),
    ]
}
