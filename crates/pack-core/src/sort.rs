//! Display ordering for the packing list
//!
//! Sorting never touches the canonical list: [`sorted_items`] borrows the
//! items and returns a freshly ordered view on every call.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Which order the list is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Insertion order (the canonical order)
    #[default]
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked items first, then packed
    Packed,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Input, SortKey::Description, SortKey::Packed];

    /// Label shown in the sort selector
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Input => "Sort by input order",
            SortKey::Description => "Sort by description",
            SortKey::Packed => "Sort by packed status",
        }
    }

    /// Next key in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            SortKey::Input => SortKey::Description,
            SortKey::Description => SortKey::Packed,
            SortKey::Packed => SortKey::Input,
        }
    }

    /// Previous key in selector order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            SortKey::Input => SortKey::Packed,
            SortKey::Description => SortKey::Input,
            SortKey::Packed => SortKey::Description,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Input => write!(f, "input"),
            SortKey::Description => write!(f, "description"),
            SortKey::Packed => write!(f, "packed"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(SortKey::Input),
            "description" => Ok(SortKey::Description),
            "packed" => Ok(SortKey::Packed),
            other => Err(format!(
                "unknown sort key '{other}' (expected input, description or packed)"
            )),
        }
    }
}

/// Order `items` for display without modifying them.
///
/// Both non-identity orders use a stable sort, so items that compare equal
/// keep their insertion order.
pub fn sorted_items(items: &[Item], key: SortKey) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match key {
        SortKey::Input => {}
        SortKey::Description => view.sort_by(|a, b| locale_cmp(&a.description, &b.description)),
        SortKey::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

thread_local! {
    /// Root-locale (CLDR) collator, built once per thread
    static COLLATOR: Option<CollatorBorrowed<'static>> =
        match Collator::try_new(locale!("und").into(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Collator unavailable, sorting by code point: {}", e);
                None
            }
        };
}

/// Compare two strings the way a person reading a list would expect.
///
/// Uses the CLDR root collation at tertiary strength:
/// 1. base letters, ignoring accents and case (`"apple" < "Banana" < "Øl" < "Zebra"`)
/// 2. accents (`"resume" < "résumé"`)
/// 3. case, lowercase first (`"a" < "A"`)
///
/// Punctuation sorts before letters and `ß` compares as `ss`. Strings the
/// collator considers equal fall back to code point order so the result is
/// a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Quantity};
    use proptest::prelude::*;

    fn item(id: u64, description: &str, packed: bool) -> Item {
        Item {
            id: ItemId::new(id),
            description: description.to_string(),
            quantity: Quantity::MIN,
            packed,
        }
    }

    fn ids(view: &[&Item]) -> Vec<u64> {
        view.iter().map(|i| i.id.get()).collect()
    }

    #[test]
    fn test_input_order_is_identity() {
        let items = vec![item(3, "b", true), item(1, "a", false), item(2, "c", false)];
        assert_eq!(ids(&sorted_items(&items, SortKey::Input)), vec![3, 1, 2]);
    }

    #[test]
    fn test_description_order_ignores_case() {
        let items = vec![
            item(1, "charger", false),
            item(2, "Passports", false),
            item(3, "Socks", false),
            item(4, "adapter", false),
        ];
        assert_eq!(
            ids(&sorted_items(&items, SortKey::Description)),
            vec![4, 1, 2, 3]
        );
    }

    #[test]
    fn test_packed_order_is_stable_partition() {
        let items = vec![
            item(1, "Passports", true),
            item(2, "Socks", false),
            item(3, "Hat", true),
            item(4, "charger", false),
        ];
        assert_eq!(ids(&sorted_items(&items, SortKey::Packed)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sorting_leaves_source_untouched() {
        let items = vec![item(2, "b", true), item(1, "a", false)];
        let before = items.clone();
        let _ = sorted_items(&items, SortKey::Description);
        let _ = sorted_items(&items, SortKey::Packed);
        assert_eq!(items, before);
    }

    #[test]
    fn test_locale_cmp_levels() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("résumé", "rez"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_accent_does_not_outrank_base_letter() {
        // Byte order would put "é" after "f"
        assert_eq!(locale_cmp("éclair", "fig"), Ordering::Less);
    }

    #[test]
    fn test_locale_cmp_known_orderings() {
        let cases = [
            ("Øl", "Zebra"),
            ("Straße", "Strat"),
            ("~hat", "apple"),
            ("éclair", "fig"),
            ("Łódź", "Madrid"),
            ("hat", "Hat"),
            ("Hat", "hats"),
            ("Socks", "sunscreen"),
            ("charger", "Charger"),
        ];
        for (lesser, greater) in cases {
            assert_eq!(locale_cmp(lesser, greater), Ordering::Less, "{lesser} < {greater}");
            assert_eq!(locale_cmp(greater, lesser), Ordering::Greater, "{greater} > {lesser}");
        }
    }

    #[test]
    fn test_description_sort_letters_without_decomposition() {
        let items = vec![
            item(1, "Zebra", false),
            item(2, "Øl", false),
            item(3, "apple", false),
            item(4, "Strat", false),
            item(5, "Straße", false),
            item(6, "~hat", false),
        ];
        let view = sorted_items(&items, SortKey::Description);
        let descriptions: Vec<&str> = view.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["~hat", "apple", "Øl", "Straße", "Strat", "Zebra"]
        );
    }

    #[test]
    fn test_sort_key_cycle() {
        for key in SortKey::ALL {
            assert_eq!(key.next().prev(), key);
        }
        assert_eq!(SortKey::Packed.next(), SortKey::Input);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("input".parse::<SortKey>(), Ok(SortKey::Input));
        assert_eq!(" Description ".parse::<SortKey>(), Ok(SortKey::Description));
        assert_eq!("packed".parse::<SortKey>(), Ok(SortKey::Packed));
        assert!("size".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_labels() {
        assert_eq!(SortKey::Input.label(), "Sort by input order");
        assert_eq!(SortKey::Description.label(), "Sort by description");
        assert_eq!(SortKey::Packed.label(), "Sort by packed status");
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(("[a-zA-Zéüøßł~ ]{0,8}", any::<bool>()), 0..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (description, packed))| item(i as u64, &description, packed))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_description_sort_is_non_decreasing(items in arb_items()) {
            let view = sorted_items(&items, SortKey::Description);
            for pair in view.windows(2) {
                prop_assert_ne!(
                    locale_cmp(&pair[0].description, &pair[1].description),
                    Ordering::Greater
                );
            }
        }

        #[test]
        fn prop_packed_sort_partitions_stably(items in arb_items()) {
            let view = sorted_items(&items, SortKey::Packed);
            let first_packed = view.iter().position(|i| i.packed).unwrap_or(view.len());
            prop_assert!(view[first_packed..].iter().all(|i| i.packed));
            prop_assert!(view[..first_packed].iter().all(|i| !i.packed));

            // ids were assigned in insertion order, so each bucket stays ascending
            for bucket in [&view[..first_packed], &view[first_packed..]] {
                prop_assert!(bucket.windows(2).all(|w| w[0].id < w[1].id));
            }
        }

        #[test]
        fn prop_every_view_is_a_permutation(items in arb_items()) {
            for key in SortKey::ALL {
                let mut seen = ids(&sorted_items(&items, key));
                seen.sort_unstable();
                let expected: Vec<u64> = (0..items.len() as u64).collect();
                prop_assert_eq!(seen, expected);
            }
        }
    }
}
