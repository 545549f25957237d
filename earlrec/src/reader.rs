#![deny(warnings)]

use crate::error::{GrammarError, ReadError};
use crate::grammar::{Grammar, Rule};
use std::str::FromStr;

// Grammar text layout, blank lines are skipped:
//
//   <#nonterminals> <#terminals> <#rules>
//   <nonterminal symbols>
//   <terminal symbols>
//   <rule>            x #rules, eg: "S -> aSb" or "S ->"
//   <start symbol>
//   ...               left for the caller

/// Parses `A -> xyz`. Spaces are ignored, a missing right side is ε.
impl FromStr for Rule {
    type Err = ReadError;

    fn from_str(content: &str) -> Result<Rule, ReadError> {
        let content: String = content.chars().filter(|&c| c != ' ').collect();
        let parts: Vec<&str> = content.split("->").collect();
        let (head, generation) = match parts[..] {
            [head] => (head, ""),
            [head, generation] => (head, generation),
            _ => return Err(ReadError::BadRule(content.clone())),
        };
        let mut chars = head.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Rule::new(c, generation)?),
            _ => Err(GrammarError::BadRuleHead(head.to_string()).into()),
        }
    }
}

fn symbol_count(line: &str) -> usize {
    line.chars().count()
}

impl Grammar {
    /// Read a grammar from its text form. Returns the grammar and the
    /// lines following the start symbol.
    pub fn read(content: &str) -> Result<(Grammar, String), ReadError> {
        let lines: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let header = lines.first().copied().unwrap_or_default();
        let counts = header
            .split_whitespace()
            .map(usize::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ReadError::BadCounts(header.to_string()))?;
        let [nonterm_count, term_count, rule_count] = counts[..] else {
            return Err(ReadError::BadCounts(header.to_string()));
        };

        let expected = rule_count
            .checked_add(4)
            .ok_or_else(|| ReadError::BadCounts(header.to_string()))?;
        if lines.len() < expected {
            return Err(ReadError::MissingLines {
                expected,
                got: lines.len(),
            });
        }
        let (nonterminals, terminals) = (lines[1], lines[2]);
        if symbol_count(nonterminals) != nonterm_count {
            return Err(ReadError::NonterminalCount {
                declared: nonterm_count,
                found: symbol_count(nonterminals),
            });
        }
        if symbol_count(terminals) != term_count {
            return Err(ReadError::TerminalCount {
                declared: term_count,
                found: symbol_count(terminals),
            });
        }
        let rules = lines[3..3 + rule_count]
            .iter()
            .map(|line| line.parse::<Rule>())
            .collect::<Result<Vec<_>, _>>()?;

        let start_line = lines[rule_count + 3];
        let mut start = start_line.chars();
        let start = match (start.next(), start.next()) {
            (Some(c), None) => c,
            _ => return Err(GrammarError::BadStart(start_line.to_string()).into()),
        };

        let grammar = Grammar::new(nonterminals.chars(), terminals.chars(), rules, start)?;
        Ok((grammar, lines[rule_count + 4..].join("\n")))
    }
}

///////////////////////////////////////////////////////////////////////////////
