use std::collections::HashSet;

/// Раскрытые строки недельной сводки. По умолчанию все свёрнуты.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedRows {
    open: HashSet<usize>,
}

impl ExpandedRows {
    pub fn is_expanded(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Flips one row and leaves the others alone
    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }
}

/// Divider after every drill-down item except the last
pub fn needs_divider(index: usize, len: usize) -> bool {
    index + 1 < len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_start_collapsed() {
        let rows = ExpandedRows::default();
        assert!((0..7).all(|i| !rows.is_expanded(i)));
    }

    #[test]
    fn test_toggle_is_independent_per_row() {
        let mut rows = ExpandedRows::default();
        rows.toggle(2);
        rows.toggle(5);
        assert!(rows.is_expanded(2));
        assert!(rows.is_expanded(5));
        assert!(!rows.is_expanded(3));

        rows.toggle(2);
        assert!(!rows.is_expanded(2));
        assert!(rows.is_expanded(5));
    }

    #[test]
    fn test_divider_between_items_only() {
        let dividers: Vec<bool> = (0..3).map(|i| needs_divider(i, 3)).collect();
        assert_eq!(dividers, vec![true, true, false]);
        assert!(!needs_divider(0, 1));
    }
}
