#![deny(warnings)]

use crate::items::Item;
use std::collections::HashSet;
use std::ops::Index;
use std::slice;

/// Items valid at one input position. Insertion ordered and deduplicated,
/// items are never removed.
#[derive(Clone, Default)]
pub struct Column {
    order: Vec<Item>,
    dedup: HashSet<Item>,
}

impl Column {
    pub fn new() -> Column {
        Column::default()
    }

    /// Returns false if the item was already present.
    pub fn push(&mut self, item: Item) -> bool {
        if self.dedup.contains(&item) {
            return false;
        }
        self.dedup.insert(item.clone());
        self.order.push(item);
        true
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.dedup.contains(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.order.iter()
    }

    /// Items pushed since the column had `mark` items.
    pub fn since(&self, mark: usize) -> &[Item] {
        &self.order[mark..]
    }
}

impl Index<usize> for Column {
    type Output = Item;
    fn index(&self, idx: usize) -> &Item {
        &self.order[idx]
    }
}

impl Extend<Item> for Column {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iterable: I) {
        for item in iterable {
            self.push(item);
        }
    }
}

impl FromIterator<Item> for Column {
    fn from_iter<I: IntoIterator<Item = Item>>(iterable: I) -> Self {
        let mut column = Column::new();
        column.extend(iterable);
        column
    }
}

/// One column per input position, `0..=n`.
pub struct Chart {
    columns: Vec<Column>,
}

impl Chart {
    pub fn new(input_len: usize) -> Chart {
        Chart {
            columns: vec![Column::new(); input_len + 1],
        }
    }

    pub fn column(&self, idx: usize) -> &Column {
        &self.columns[idx]
    }

    pub fn column_mut(&mut self, idx: usize) -> &mut Column {
        &mut self.columns[idx]
    }

    pub fn columns(&self) -> slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn last(&self) -> &Column {
        &self.columns[self.columns.len() - 1]
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Chart, Column};
    use crate::grammar::Rule;
    use crate::items::Item;
    use std::sync::Arc;

    fn items() -> Vec<Item> {
        let r1 = Arc::new(Rule::new('S', "aSb").unwrap());
        let r2 = Arc::new(Rule::new('S', "").unwrap());
        vec![
            Item::predict(&r1, 0),
            Item::predict(&r2, 0),
            Item::predict(&r1, 0).advance(),
            Item::predict(&r1, 1),
        ]
    }

    #[test]
    fn column_dedup() {
        let mut column = Column::new();
        for item in items() {
            assert!(column.push(item));
        }
        assert_eq!(column.len(), 4);
        for item in items() {
            assert!(!column.push(item));
        }
        assert_eq!(column.len(), 4);
    }

    #[test]
    fn column_keeps_order() {
        let input = items();
        let column: Column = input.iter().chain(input.iter()).cloned().collect();
        assert_eq!(column.len(), input.len());
        for (i, item) in column.iter().enumerate() {
            assert_eq!(&column[i], item);
            assert_eq!(&input[i], item);
        }
    }

    #[test]
    fn column_since() {
        let input = items();
        let mut column: Column = input[..2].iter().cloned().collect();
        let mark = column.len();
        assert!(column.since(mark).is_empty());
        column.extend(input.iter().cloned());
        assert_eq!(column.since(mark), &input[2..]);
        assert!(column.contains(&input[0]));
    }

    #[test]
    fn chart_columns() {
        let chart = Chart::new(3);
        assert_eq!(chart.columns().count(), 4);
        assert!(chart.columns().all(Column::is_empty));
        let chart = Chart::new(0);
        assert_eq!(chart.columns().count(), 1);
        assert!(chart.last().is_empty());
    }
}
