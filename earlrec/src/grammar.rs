#![deny(warnings)]

use crate::error::GrammarError;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// How the synthetic start symbol of an augmented grammar is rendered.
pub const START_SYMBOL: char = '$';

/// Symbols are single characters. Uppercase latin letters are nonterminals,
/// any other character except space is a terminal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    NonTerm(char),
    Term(char),
    // Head of the augmented start rule, never produced by `classify`
    Start,
}

pub fn is_nonterminal(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_terminal(c: char) -> bool {
    !is_nonterminal(c) && c != ' '
}

impl Symbol {
    /// Space is reserved as a separator and classifies as nothing.
    pub fn classify(c: char) -> Option<Symbol> {
        if is_nonterminal(c) {
            Some(Symbol::NonTerm(c))
        } else if is_terminal(c) {
            Some(Symbol::Term(c))
        } else {
            None
        }
    }

    pub fn name(&self) -> char {
        match self {
            Symbol::NonTerm(c) | Symbol::Term(c) => *c,
            Symbol::Start => START_SYMBOL,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Term(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A production `head -> generation`. An empty generation derives ε.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub head: Symbol,
    pub generation: Vec<Symbol>,
}

impl Rule {
    /// Classify the characters of a rule. Membership of the symbols in a
    /// particular grammar is only checked by `Grammar::new`.
    pub fn new(head: char, generation: &str) -> Result<Rule, GrammarError> {
        let head = match Symbol::classify(head) {
            Some(sym @ Symbol::NonTerm(_)) => sym,
            _ => return Err(GrammarError::BadRuleHead(head.to_string())),
        };
        let generation = generation
            .chars()
            .map(|c| Symbol::classify(c).ok_or(GrammarError::UndeclaredSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Rule { head, generation })
    }

    /// `$ -> start`, the rule wrapping a grammar for recognition.
    pub(crate) fn start_rule(start: Symbol) -> Rule {
        Rule {
            head: Symbol::Start,
            generation: vec![start],
        }
    }

    pub fn is_epsilon(&self) -> bool {
        self.generation.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> ", self.head)?;
        if self.is_epsilon() {
            return write!(f, "ε");
        }
        self.generation.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A validated context-free grammar. Read-only once built.
#[derive(Clone, Debug)]
pub struct Grammar {
    nonterminals: BTreeSet<char>,
    terminals: BTreeSet<char>,
    rules: Vec<Arc<Rule>>,
    start: Symbol,
    // rules grouped by head, in declaration order
    by_head: HashMap<Symbol, Vec<Arc<Rule>>>,
}

impl Grammar {
    pub fn new(
        nonterminals: impl IntoIterator<Item = char>,
        terminals: impl IntoIterator<Item = char>,
        rules: impl IntoIterator<Item = Rule>,
        start: char,
    ) -> Result<Grammar, GrammarError> {
        let nonterminals: BTreeSet<char> = nonterminals.into_iter().collect();
        let terminals: BTreeSet<char> = terminals.into_iter().collect();
        if let Some(&c) = nonterminals.iter().find(|&&c| !is_nonterminal(c)) {
            return Err(GrammarError::NotNonterminal(c));
        }
        if let Some(&c) = terminals.iter().find(|&&c| !is_terminal(c)) {
            return Err(GrammarError::NotTerminal(c));
        }
        let rules: Vec<Arc<Rule>> = rules.into_iter().map(Arc::new).collect();
        // a symbol must carry the kind its character classifies to
        let well_formed = |s: &Symbol| Symbol::classify(s.name()) == Some(*s);
        for rule in &rules {
            if !well_formed(&rule.head) || !nonterminals.contains(&rule.head.name()) {
                return Err(GrammarError::BadRuleHead(rule.head.to_string()));
            }
            if let Some(s) = rule.generation.iter().find(|s| !well_formed(s)) {
                return Err(GrammarError::MisclassifiedSymbol(s.name()));
            }
            let declared = |c: &char| nonterminals.contains(c) || terminals.contains(c);
            if let Some(s) = rule.generation.iter().find(|s| !declared(&s.name())) {
                return Err(GrammarError::UndeclaredSymbol(s.name()));
            }
        }
        if !nonterminals.contains(&start) {
            return Err(GrammarError::BadStart(start.to_string()));
        }
        let mut grammar = Grammar {
            nonterminals,
            terminals,
            rules,
            start: Symbol::NonTerm(start),
            by_head: HashMap::new(),
        };
        grammar.index_rules();
        Ok(grammar)
    }

    fn index_rules(&mut self) {
        self.by_head.clear();
        for rule in &self.rules {
            self.by_head.entry(rule.head).or_default().push(rule.clone());
        }
    }

    /// Copy of this grammar extended with `start_rule`, which becomes the
    /// new start. The receiver is left untouched.
    pub(crate) fn augmented(&self, start_rule: Arc<Rule>) -> Grammar {
        let mut grammar = self.clone();
        grammar.start = start_rule.head;
        grammar.rules.push(start_rule);
        grammar.index_rules();
        grammar
    }

    pub fn nonterminals(&self) -> &BTreeSet<char> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &BTreeSet<char> {
        &self.terminals
    }

    pub fn rules(&self) -> &[Arc<Rule>] {
        &self.rules
    }

    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Rules whose head is `head`, in declaration order.
    pub fn rules_for(&self, head: Symbol) -> impl Iterator<Item = &Arc<Rule>> {
        self.by_head.get(&head).into_iter().flatten()
    }

    /// Check a query only uses symbols of the terminal alphabet.
    pub fn contains_only_terminals(&self, word: &str) -> bool {
        word.chars().all(|c| self.terminals.contains(&c))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut group_order = Vec::new();
        for rule in &self.rules {
            if !group_order.contains(&rule.head) {
                group_order.push(rule.head);
            }
        }
        writeln!(f, "Start: {}", self.start)?;
        for head in group_order {
            writeln!(f)?;
            for rule in self.rules_for(head) {
                writeln!(f, "{}", rule)?;
            }
        }
        Ok(())
    }
}

/// Builds a Grammar by chaining. The first error is kept and reported by
/// `into_grammar`.
#[derive(Default)]
pub struct GrammarBuilder {
    nonterminals: Vec<char>,
    terminals: Vec<char>,
    rules: Vec<Rule>,
    error: Option<GrammarError>,
}

impl GrammarBuilder {
    pub fn nonterm(mut self, c: char) -> Self {
        self.nonterminals.push(c);
        self
    }

    pub fn terminal(mut self, c: char) -> Self {
        self.terminals.push(c);
        self
    }

    pub fn nonterms(self, symbols: &str) -> Self {
        symbols.chars().fold(self, GrammarBuilder::nonterm)
    }

    pub fn terminals(self, symbols: &str) -> Self {
        symbols.chars().fold(self, GrammarBuilder::terminal)
    }

    pub fn rule(mut self, head: char, generation: &str) -> Self {
        match Rule::new(head, generation) {
            Ok(rule) => self.rules.push(rule),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    pub fn into_grammar(self, start: char) -> Result<Grammar, GrammarError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Grammar::new(self.nonterminals, self.terminals, self.rules, start)
    }
}

///////////////////////////////////////////////////////////////////////////////
