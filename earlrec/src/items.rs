#![deny(warnings)]

use crate::grammar::{Rule, Symbol};
use std::fmt;
use std::sync::Arc;

/// An Item is a partially matched `Rule`. `dot` shows the match progress.
/// Items are equal when rule, dot and origin are all equal; the hash is
/// derived from the same fields.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub rule: Arc<Rule>, // LR0item (dotted rule)
    pub dot: usize,      // dot position within the rule
    pub origin: usize,   // chart column where the match started
}

impl Item {
    /// Build a new `Prediction` based Item.
    pub fn predict(rule: &Arc<Rule>, origin: usize) -> Item {
        Item {
            rule: rule.clone(),
            dot: 0,
            origin,
        }
    }

    /// Item is complete if Rule has being fully matched
    pub fn is_complete(&self) -> bool {
        self.dot >= self.rule.generation.len()
    }

    /// Exposes the next symbol in the progress of the Rule
    pub fn next_symbol(&self) -> Option<Symbol> {
        self.rule.generation.get(self.dot).copied()
    }

    pub fn is_next_terminal(&self) -> bool {
        self.next_symbol().is_some_and(|s| s.is_terminal())
    }

    pub fn is_next_nonterminal(&self) -> bool {
        self.next_symbol().is_some_and(|s| s.is_nonterminal())
    }

    /// Move the dot over the next symbol. Scan and complete only advance
    /// items that still expect something.
    pub fn advance(&self) -> Item {
        assert!(!self.is_complete(), "Item is already complete: {}", self);
        Item {
            rule: self.rule.clone(),
            dot: self.dot + 1,
            origin: self.origin,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (pre, post) = self.rule.generation.split_at(self.dot);
        write!(f, "[{} -> ", self.rule.head)?;
        pre.iter().try_for_each(|s| write!(f, "{}", s))?;
        write!(f, "\u{00b7}")?;
        post.iter().try_for_each(|s| write!(f, "{}", s))?;
        write!(f, ", {}]", self.origin)
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Item, Rule, Symbol};
    use std::collections::HashSet;
    use std::sync::Arc;

    // S -> aSb
    fn gen_rule1() -> Arc<Rule> {
        Arc::new(Rule::new('S', "aSb").unwrap())
    }

    // S -> SS
    fn gen_rule2() -> Arc<Rule> {
        Arc::new(Rule::new('S', "SS").unwrap())
    }

    fn item(rule: Arc<Rule>, dot: usize, origin: usize) -> Item {
        Item { rule, dot, origin }
    }

    #[test]
    fn item_basics() {
        // Check item equality
        assert_eq!(item(gen_rule1(), 0, 0), item(gen_rule1(), 0, 0));
        assert_ne!(item(gen_rule2(), 0, 0), item(gen_rule1(), 0, 0));
        assert_ne!(item(gen_rule1(), 1, 0), item(gen_rule1(), 0, 0));
        assert_ne!(item(gen_rule1(), 0, 1), item(gen_rule1(), 0, 0));
        // Check item complete
        assert!(!item(gen_rule1(), 2, 0).is_complete());
        assert!(item(gen_rule1(), 3, 0).is_complete());
        // Check next symbol
        assert_eq!(item(gen_rule1(), 0, 0).next_symbol(), Some(Symbol::Term('a')));
        assert_eq!(item(gen_rule1(), 1, 0).next_symbol(), Some(Symbol::NonTerm('S')));
        assert_eq!(item(gen_rule1(), 3, 0).next_symbol(), None);
        assert!(item(gen_rule1(), 0, 0).is_next_terminal());
        assert!(item(gen_rule1(), 1, 0).is_next_nonterminal());
        let done = item(gen_rule1(), 3, 0);
        assert!(!done.is_next_terminal() && !done.is_next_nonterminal());
    }

    #[test]
    fn item_structural_dedup() {
        // distinct Arcs holding equal rules are the same item
        let mut m = HashSet::new();
        m.insert(item(gen_rule1(), 1, 2));
        m.insert(item(gen_rule1(), 1, 2));
        m.insert(item(gen_rule1(), 1, 3));
        m.insert(item(gen_rule2(), 1, 2));
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn item_predict() {
        let rule = gen_rule1();
        let predict = Item::predict(&rule, 23);
        assert_eq!(item(rule, 0, 23), predict);
    }

    #[test]
    fn item_advance() {
        let source = item(gen_rule1(), 1, 4);
        let next = source.advance();
        assert_eq!(next, item(gen_rule1(), 2, 4));
        // source is left as it was
        assert_eq!(source.dot, 1);
        assert!(Arc::ptr_eq(&source.rule, &next.rule));
    }

    #[test]
    fn item_epsilon_is_complete() {
        let eps = Item::predict(&Arc::new(Rule::new('S', "").unwrap()), 0);
        assert!(eps.is_complete());
        assert_eq!(eps.to_string(), "[S -> \u{00b7}, 0]");
    }

    #[test]
    fn item_display() {
        assert_eq!(item(gen_rule1(), 1, 2).to_string(), "[S -> a\u{00b7}Sb, 2]");
        assert_eq!(item(gen_rule1(), 3, 0).to_string(), "[S -> aSb\u{00b7}, 0]");
    }

    #[test]
    #[should_panic]
    fn item_advance_complete() {
        item(gen_rule2(), 2, 0).advance();
    }
}
