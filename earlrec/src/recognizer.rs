#![deny(warnings)]

use crate::chart::{Chart, Column};
use crate::grammar::{Grammar, Rule, Symbol};
use crate::items::Item;
use std::collections::HashSet;
use std::sync::Arc;

/// Decides membership of words in the language of a grammar.
/// Holds no per-word state, one recognizer can answer any number of words.
pub struct EarleyRecognizer {
    grammar: Grammar,
    start_rule: Arc<Rule>,
}

impl EarleyRecognizer {
    /// Wrap a copy of `grammar` with the rule `$ -> start`. Acceptance then
    /// reduces to finding `[$ -> start·, 0]` in the last column.
    pub fn fit(grammar: &Grammar) -> EarleyRecognizer {
        let start_rule = Arc::new(Rule::start_rule(grammar.start()));
        EarleyRecognizer {
            grammar: grammar.augmented(start_rule.clone()),
            start_rule,
        }
    }

    /// The augmented grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn accepts(&self, word: &str) -> bool {
        let chart = self.chart(word);
        let accepted = Item::predict(&self.start_rule, 0).advance();
        chart.last().contains(&accepted)
    }

    /// Build new `Prediction` items for rules headed by `nonterm`.
    fn predictions(&self, nonterm: Symbol, origin: usize) -> impl Iterator<Item = Item> + '_ {
        self.grammar
            .rules_for(nonterm)
            .map(move |rule| Item::predict(rule, origin))
    }

    /// Build new `Completion` items based on `trigger` item having completed.
    /// When an item is completed it advances all items in its origin column
    /// whose next symbol matches its rule head.
    fn completions<'r>(origin_column: &'r Column, trigger: &'r Item) -> impl Iterator<Item = Item> + 'r {
        assert!(trigger.is_complete(), "Incomplete `trigger` used for completions");
        origin_column
            .iter()
            .filter(move |item| item.next_symbol() == Some(trigger.rule.head))
            .map(Item::advance)
    }

    /// Build new `Scan` items for items whose next symbol is the terminal
    /// `lexeme`. Characters outside the alphabet match nothing.
    fn scans(column: &Column, lexeme: char) -> impl Iterator<Item = Item> + '_ {
        column
            .iter()
            .filter(move |item| item.next_symbol() == Some(Symbol::Term(lexeme)))
            .map(Item::advance)
    }

    /// Predict/Complete until no new Items are added to column `idx`.
    /// Each round only looks at the items the previous round added.
    fn close_column(&self, chart: &mut Chart, idx: usize) {
        // heads that derived ε starting and ending at `idx`
        let mut nullable = HashSet::new();
        let mut frontier = 0;
        while frontier < chart.column(idx).len() {
            let mut new_items = Vec::new();
            let column = chart.column(idx);
            for trigger in column.since(frontier) {
                match trigger.next_symbol() {
                    None => {
                        if trigger.origin == idx {
                            nullable.insert(trigger.rule.head);
                        }
                        new_items.extend(EarleyRecognizer::completions(
                            chart.column(trigger.origin),
                            trigger,
                        ));
                    }
                    Some(Symbol::Term(_)) => {}
                    Some(nonterm) => {
                        new_items.extend(self.predictions(nonterm, idx));
                        // its completion already ran before this item existed
                        if nullable.contains(&nonterm) {
                            new_items.push(trigger.advance());
                        }
                    }
                }
            }
            frontier = column.len();
            chart.column_mut(idx).extend(new_items);
        }
    }

    /// Run recognition over `word` and return the whole chart.
    pub fn chart(&self, word: &str) -> Chart {
        let input: Vec<char> = word.chars().collect();
        let mut chart = Chart::new(input.len());
        chart
            .column_mut(0)
            .push(Item::predict(&self.start_rule, 0));

        for idx in 0..=input.len() {
            // Build S[idx] with items in the previous column that accept the input
            if idx > 0 {
                let scanned: Vec<_> =
                    EarleyRecognizer::scans(chart.column(idx - 1), input[idx - 1]).collect();
                chart.column_mut(idx).extend(scanned);
            }
            self.close_column(&mut chart, idx);
        }

        if cfg!(feature = "debug") {
            for (idx, column) in chart.columns().enumerate() {
                eprintln!("=== Column {} ===", idx);
                for item in column.iter() {
                    eprintln!("{}", item);
                }
            }
        }
        chart
    }
}

///////////////////////////////////////////////////////////////////////////////
