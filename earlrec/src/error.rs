#![deny(warnings)]

use thiserror::Error;

/// Invariant violations detected while constructing a `Grammar`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("'{0}' symbol is not nonterminal")]
    NotNonterminal(char),
    #[error("'{0}' symbol is not terminal")]
    NotTerminal(char),
    #[error("left side of a rule must be one declared nonterminal (got: '{0}')")]
    BadRuleHead(String),
    #[error("'{0}' symbol is used as the wrong kind of symbol")]
    MisclassifiedSymbol(char),
    #[error("'{0}' symbol is listed as neither terminal nor nonterminal")]
    UndeclaredSymbol(char),
    #[error("start symbol must be one declared nonterminal (got: '{0}')")]
    BadStart(String),
}

/// Problems in the grammar text format or in a block of requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("expected '<#nonterminals> <#terminals> <#rules>' (got: '{0}')")]
    BadCounts(String),
    #[error("not enough lines: expected at least {expected}, got {got}")]
    MissingLines { expected: usize, got: usize },
    #[error("declared {declared} nonterminal symbols, found {found}")]
    NonterminalCount { declared: usize, found: usize },
    #[error("declared {declared} terminal symbols, found {found}")]
    TerminalCount { declared: usize, found: usize },
    #[error("malformed rule: '{0}'")]
    BadRule(String),
    #[error("incorrect number of requests: '{0}'")]
    BadRequestCount(String),
    #[error("incorrect word: '{0}'")]
    BadWord(String),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
