//! Builds a small vocabulary, prints the trie and deletes a word from it.
//!
//! Run with `RUST_LOG=word_trie=trace cargo run --example basic` to see the
//! insert and delete events.
use tracing_subscriber::EnvFilter;
use word_trie::Trie;

const WORDS: &[&str] = &[
    "car", "cars", "boat", "boats", "race", "races", "boar", "boars", "bond", "bonds", "cloak",
    "cloaks", "rotten", "tomatoes", "problem", "problems",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie = Trie::new();
    for word in WORDS {
        trie.insert_word(word);
    }

    print!("{}", trie);

    let word = "problems";
    println!("Word [{}] exists: {}", word, trie.search_word(word));
    trie.delete_word(word);
    println!("Word [{}] exists: {}", word, trie.search_word(word));

    print!("{}", trie);

    println!("Words starting with 'bo': {:?}", trie.list_words_prefix("bo"));
    println!("{} words stored", trie.len());
}

