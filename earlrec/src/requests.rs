#![deny(warnings)]

use crate::error::ReadError;
use crate::recognizer::EarleyRecognizer;

/// Answer a block of requests: a count line followed by exactly that many
/// words. Every word must be spelled with the grammar's terminals.
pub fn answer_requests(
    recognizer: &EarleyRecognizer,
    content: &str,
) -> Result<Vec<bool>, ReadError> {
    let mut lines = content.lines().map(str::trim);
    let count_line = lines.next().unwrap_or_default();
    let words: Vec<&str> = lines.collect();
    // only plain digits, no sign
    let digits = !count_line.is_empty() && count_line.chars().all(|c| c.is_ascii_digit());
    match count_line.parse::<usize>() {
        Ok(count) if digits && count == words.len() => {}
        _ => return Err(ReadError::BadRequestCount(count_line.to_string())),
    }
    words
        .into_iter()
        .map(|word| {
            if recognizer.grammar().contains_only_terminals(word) {
                Ok(recognizer.accepts(word))
            } else {
                Err(ReadError::BadWord(word.to_string()))
            }
        })
        .collect()
}

/// One `Yes`/`No` line per answer.
pub fn format_answers(answers: &[bool]) -> String {
    answers
        .iter()
        .map(|&accepted| if accepted { "Yes" } else { "No" })
        .collect::<Vec<_>>()
        .join("\n")
}

///////////////////////////////////////////////////////////////////////////////
