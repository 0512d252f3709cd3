//! # pack-core - Core Domain Types
//!
//! Foundation crate for Packing List. Provides the item model, the display
//! sort projection, completion statistics, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, icu_collator).
//!
//! ## Public API
//!
//! ### Items (`item`)
//! - [`Item`] - A single entry on the packing list
//! - [`ItemId`] - Unique, immutable item identity
//! - [`Quantity`] - Item count, bounded to `1..=20`
//! - [`IdGenerator`] - Strictly increasing millisecond-based ids
//!
//! ### Sorting (`sort`)
//! - [`SortKey`] - Display order selector
//! - [`sorted_items()`] - Pure display projection over the canonical list
//! - [`locale_cmp()`] - Collation used for description ordering
//!
//! ### Statistics (`stats`)
//! - [`PackingStats`] - Item, packed and percentage counts
//! - [`Summary`] - What the footer should say
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum (terminal, config, logging)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pack_core::prelude::*;
//! ```

pub mod error;
pub mod item;
pub mod logging;
pub mod prelude;
pub mod sort;
pub mod stats;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use item::{sample_items, IdGenerator, Item, ItemId, Quantity};
pub use sort::{locale_cmp, sorted_items, SortKey};
pub use stats::{PackingStats, Summary};
