use std::fs;
use std::path::PathBuf;

use clap::Parser;
use earlrec::{EarleyRecognizer, Grammar, ReadError};

#[derive(Parser)]
#[command(version, about = "Check words against a context-free grammar")]
struct Cli {
    /// File with the grammar, optionally followed by a block of requests
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the answers. Without it words are read from a prompt
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn answer(content: &str) -> Result<Vec<bool>, ReadError> {
    let (grammar, requests) = Grammar::read(content)?;
    let recognizer = EarleyRecognizer::fit(&grammar);
    earlrec::answer_requests(&recognizer, &requests)
}

/// Answers for a whole input file. Malformed input yields `InputError`.
fn run(content: &str) -> String {
    match answer(content) {
        Ok(answers) => earlrec::format_answers(&answers),
        Err(_) => "InputError".to_string(),
    }
}

fn interactive(content: &str) -> Result<(), String> {
    let (grammar, _) = Grammar::read(content).map_err(|e| format!("InputError: {}", e))?;
    println!("{}", grammar);
    let recognizer = EarleyRecognizer::fit(&grammar);

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let word = line.trim();
                if !grammar.contains_only_terminals(word) {
                    println!("Incorrect word: '{}'", word);
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                println!("{}", if recognizer.accepts(word) { "Yes" } else { "No" });
            }
        }
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let content = fs::read_to_string(&cli.input)
        .map_err(|e| format!("{}: {}", cli.input.display(), e))?;
    match cli.output {
        Some(output) => fs::write(&output, run(&content))
            .map_err(|e| format!("{}: {}", output.display(), e)),
        None => interactive(&content),
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Cli, run};
    use clap::Parser;

    #[test]
    fn answers_requests() {
        let input = "1 2 2\nS\nab\nS -> aSb\nS ->\nS\n5\n\nab\naabb\na\nba\n";
        // blank lines are skipped, so only 4 words follow the count
        assert_eq!(run(input), "InputError");
        let input = "1 2 2\nS\nab\nS -> aSb\nS ->\nS\n4\nab\naabb\na\nba\n";
        assert_eq!(run(input), "Yes\nYes\nNo\nNo");
    }

    #[test]
    fn unit_chain_grammar() {
        let input = "\
            2 1 2\n\
            SA\n\
            a\n\
            S -> A\n\
            A -> a\n\
            S\n\
            2\n\
            a\n\
            aa\n";
        assert_eq!(run(input), "Yes\nNo");
    }

    #[test]
    fn input_errors() {
        // unknown symbol in a word
        assert_eq!(run("1 2 1\nS\nab\nS -> ab\nS\n1\nabc"), "InputError");
        // rule with an undeclared symbol
        assert_eq!(run("1 2 1\nS\nab\nS -> aXb\nS\n1\nab"), "InputError");
        // no requests block
        assert_eq!(run("1 2 1\nS\nab\nS -> ab\nS"), "InputError");
        assert_eq!(run("garbage"), "InputError");
        // rule count overflowing the line total
        assert_eq!(run("1 1 18446744073709551615\nS\na\nS->a\nS"), "InputError");
        // signed request count
        assert_eq!(run("1 2 1\nS\nab\nS -> ab\nS\n+1\nab"), "InputError");
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from(["earlrec", "-i", "in.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(cli.input.to_str(), Some("in.txt"));
        assert_eq!(cli.output.unwrap().to_str(), Some("out.txt"));
        let cli = Cli::try_parse_from(["earlrec", "--input", "g.txt"]).unwrap();
        assert!(cli.output.is_none());
        assert!(Cli::try_parse_from(["earlrec", "-o", "out.txt"]).is_err());
    }
}
