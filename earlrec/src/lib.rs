#![deny(warnings)]

mod error;
pub use crate::error::{GrammarError, ReadError};

mod grammar;
pub use crate::grammar::{Grammar, GrammarBuilder, Rule, Symbol, START_SYMBOL};
pub use crate::grammar::{is_nonterminal, is_terminal};

mod chart;
mod items;
pub use crate::chart::{Chart, Column};
pub use crate::items::Item;

mod recognizer;
pub use crate::recognizer::EarleyRecognizer;

mod reader;
mod requests;
pub use crate::requests::{answer_requests, format_answers};
