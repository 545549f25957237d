fn main() {
    // Gramar:  S -> aSb | ε
    let grammar = earlrec::GrammarBuilder::default()
        .nonterm('S')
        .terminals("ab")
        .rule('S', "aSb")
        .rule('S', "")
        .into_grammar('S')
        .unwrap();
    println!("{}", grammar);

    let recognizer = earlrec::EarleyRecognizer::fit(&grammar);
    let words = std::env::args().skip(1).collect::<Vec<String>>();
    let words = if words.is_empty() {
        vec!["".to_string(), "ab".to_string(), "aabb".to_string(), "aab".to_string()]
    } else {
        words
    };
    for word in words {
        println!("{:?}: {}", word, recognizer.accepts(&word));
    }
}
