//! Completion statistics for the footer

use crate::item::Item;

/// Counts derived from the canonical list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackingStats {
    pub num_items: usize,
    pub num_packed: usize,
    /// `round(100 * num_packed / num_items)`, half rounded up; 0 for an empty list
    pub percentage: u32,
}

impl PackingStats {
    pub fn from_items(items: &[Item]) -> Self {
        let num_items = items.len();
        let num_packed = items.iter().filter(|item| item.packed).count();
        Self {
            num_items,
            num_packed,
            percentage: rounded_percentage(num_packed, num_items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }
}

/// Integer round-half-up of `100 * part / whole`.
///
/// Stays in integers so `part == whole` is always exactly 100.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let pct = (200 * part as u64 + whole as u64) / (2 * whole as u64);
    u32::try_from(pct).unwrap_or(100)
}

/// What the summary footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing on the list yet
    Empty,
    /// Everything is packed (percentage rounds to 100)
    Complete,
    /// Some way through
    Progress {
        num_items: usize,
        num_packed: usize,
        percentage: u32,
    },
}

impl Summary {
    pub fn from_items(items: &[Item]) -> Self {
        Self::from_stats(PackingStats::from_items(items))
    }

    pub fn from_stats(stats: PackingStats) -> Self {
        if stats.is_empty() {
            Summary::Empty
        } else if stats.percentage == 100 {
            Summary::Complete
        } else {
            Summary::Progress {
                num_items: stats.num_items,
                num_packed: stats.num_packed,
                percentage: stats.percentage,
            }
        }
    }

    /// Footer text. `emoji = false` drops the pictographs for plain terminals.
    pub fn message(&self, emoji: bool) -> String {
        match (self, emoji) {
            (Summary::Empty, true) => "Start adding some items to your packing list 🚀".to_string(),
            (Summary::Empty, false) => "Start adding some items to your packing list".to_string(),
            (Summary::Complete, true) => "You got everything! Ready to go ✈️".to_string(),
            (Summary::Complete, false) => "You got everything! Ready to go".to_string(),
            (
                Summary::Progress {
                    num_items,
                    num_packed,
                    percentage,
                },
                emoji,
            ) => format!(
                "{}You have {num_items} items on your list, and you already packed {num_packed} ({percentage}%)",
                if emoji { "💼 " } else { "" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Quantity};
    use insta::assert_snapshot;

    fn items(packed: &[bool]) -> Vec<Item> {
        packed
            .iter()
            .enumerate()
            .map(|(i, &packed)| Item {
                id: ItemId::new(i as u64),
                description: format!("item {i}"),
                quantity: Quantity::MIN,
                packed,
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let stats = PackingStats::from_items(&[]);
        assert_eq!(stats, PackingStats::default());
        assert_eq!(Summary::from_stats(stats), Summary::Empty);
    }

    #[test]
    fn test_single_packed_item_is_complete() {
        let stats = PackingStats::from_items(&items(&[true]));
        assert_eq!(stats.num_items, 1);
        assert_eq!(stats.num_packed, 1);
        assert_eq!(stats.percentage, 100);
        assert_eq!(Summary::from_stats(stats), Summary::Complete);
    }

    #[test]
    fn test_half_packed() {
        let summary = Summary::from_items(&items(&[true, false]));
        assert_eq!(
            summary,
            Summary::Progress {
                num_items: 2,
                num_packed: 1,
                percentage: 50
            }
        );
        let text = summary.message(true);
        assert!(text.contains('2'));
        assert!(text.contains('1'));
        assert!(text.contains("50"));
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(rounded_percentage(0, 5), 0);
        assert_eq!(rounded_percentage(0, 0), 0);
    }

    #[test]
    fn test_all_packed_is_exactly_one_hundred() {
        for n in 1..=500 {
            assert_eq!(rounded_percentage(n, n), 100, "n = {n}");
        }
    }

    #[test]
    fn test_nothing_packed_is_progress() {
        let summary = Summary::from_items(&items(&[false, false, false]));
        assert!(matches!(
            summary,
            Summary::Progress {
                num_packed: 0,
                percentage: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_messages() {
        assert_snapshot!(
            Summary::Empty.message(true),
            @"Start adding some items to your packing list 🚀"
        );
        assert_snapshot!(
            Summary::Complete.message(true),
            @"You got everything! Ready to go ✈️"
        );
        assert_snapshot!(
            Summary::from_items(&items(&[true, false, false])).message(true),
            @"💼 You have 3 items on your list, and you already packed 1 (33%)"
        );
        assert_snapshot!(
            Summary::from_items(&items(&[true, false, false])).message(false),
            @"You have 3 items on your list, and you already packed 1 (33%)"
        );
    }
}
