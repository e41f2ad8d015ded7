use word_trie::{PrefixMode, Trie, TrieConfig};

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

#[test]
fn test_insert_search_delete_scenario() {
    let mut trie = Trie::new();
    for word in &["car", "cars", "boat", "boats"] {
        trie.insert_word(word);
    }

    assert_eq!(trie.len(), 4);
    assert!(trie.search_word("car"));
    assert!(!trie.search_word("ca"));

    trie.delete_word("cars");

    assert_eq!(trie.len(), 3);
    assert!(trie.search_word("car"));
    assert!(!trie.search_word("cars"));
    assert_eq!(sorted(trie.list_words()), vec!["boat", "boats", "car"]);
}

#[test]
fn test_prefix_listing_scenario() {
    let trie: Trie = vec!["boar", "boars", "boat", "boats"].into_iter().collect();
    let all = vec!["boar", "boars", "boat", "boats"];

    assert_eq!(sorted(trie.list_words_prefix("bo")), all);
    assert_eq!(sorted(trie.list_words_prefix("boa")), all);
    assert!(trie.list_words_prefix("x").is_empty());
}

#[test]
fn test_prefix_that_is_a_word() {
    let words = vec!["boat", "boats", "boater"];

    // By default a prefix ending on a stored word is rejected
    let trie: Trie = words.iter().collect();
    assert!(trie.valid_prefix("boat").is_none());
    assert!(trie.list_words_prefix("boat").is_empty());

    let mut inclusive =
        Trie::with_config(TrieConfig::default().prefix_mode(PrefixMode::IncludeTerminal));
    inclusive.extend(&words);
    assert_eq!(inclusive.list_words_prefix("boat"), vec!["boat", "boater", "boats"]);
}

#[test]
fn test_shared_ancestor_survives_deletion() {
    let mut trie: Trie = vec!["problem", "problems", "proper"].into_iter().collect();

    assert!(trie.delete_word("problems"));
    assert!(trie.search_word("problem"));
    assert!(trie.search_word("proper"));

    let m = trie
        .valid_prefix("proble")
        .and_then(|node| node.get_child('m'))
        .expect("node for 'problem' must survive");
    assert!(m.is_end_of_word());
    assert!(m.is_leaf());
}

#[test]
fn test_deleting_every_word_empties_the_tree() {
    let words = vec!["rotten", "race", "races", "tomatoes"];
    let mut trie: Trie = words.iter().collect();

    for word in &words {
        assert!(trie.delete_word(word));
    }

    assert!(trie.is_empty());
    assert!(trie.list_words().is_empty());
    assert_eq!(trie, Trie::new());
    assert_eq!(trie.to_string(), "root, is_end_of_word: false\n");
}

#[test]
fn test_render_snapshot() {
    let trie: Trie = vec!["car", "cars", "boat"].into_iter().collect();

    let expected = "\
root, is_end_of_word: false
\tb, is_end_of_word: false
\t\to, is_end_of_word: false
\t\t\ta, is_end_of_word: false
\t\t\t\tt, is_end_of_word: true
\tc, is_end_of_word: false
\t\ta, is_end_of_word: false
\t\t\tr, is_end_of_word: true
\t\t\t\ts, is_end_of_word: true
";
    assert_eq!(trie.to_string(), expected);
}

#[test]
fn test_render_after_delete_matches_fresh_build() {
    let mut trie: Trie = vec!["cloak", "cloaks", "bond", "bonds"].into_iter().collect();
    trie.delete_word("cloaks");
    trie.delete_word("bond");

    let fresh: Trie = vec!["cloak", "bonds"].into_iter().collect();
    assert_eq!(trie.to_string(), fresh.to_string());
}

#[test]
fn test_unicode_words() {
    let mut trie = Trie::new();
    trie.insert_word("naïve");
    trie.insert_word("naïveté");
    trie.insert_word("日本");
    trie.insert_word("日本語");

    assert!(trie.search_word("naïve"));
    assert!(!trie.search_word("naive"));
    assert_eq!(trie.list_words_prefix("日"), vec!["日本", "日本語"]);

    trie.delete_word("日本語");
    assert_eq!(trie.list_words(), vec!["naïve", "naïveté", "日本"]);
}

#[test]
fn test_rebuild_from_listing() {
    let original: Trie = vec!["tomatoes", "rotten", "race", "races"].into_iter().collect();
    let rebuilt: Trie = original.list_words().into_iter().collect();

    assert_eq!(original, rebuilt);
    assert_eq!(rebuilt.len(), 4);
}

#[test]
fn test_sample_vocabulary() {
    let words = [
        "car", "cars", "boat", "boats", "race", "races", "boar", "boars", "bond", "bonds",
        "cloak", "cloaks", "rotten", "tomatoes", "problem", "problems",
    ];
    let mut trie: Trie = words.iter().collect();
    assert_eq!(trie.len(), words.len());

    assert!(trie.delete_word("problems"));
    assert!(!trie.search_word("problems"));
    assert!(trie.search_word("problem"));
    assert_eq!(trie.len(), words.len() - 1);
    assert_eq!(
        trie.list_words_prefix("bo"),
        vec!["boar", "boars", "boat", "boats", "bond", "bonds"]
    );
}

#[test]
fn test_long_word_survives_drop_and_prune() {
    let long: String = std::iter::repeat('x').take(100_000).collect();

    let mut trie = Trie::new();
    trie.insert_word(&long);
    assert!(trie.delete_word(&long));
    assert!(trie.is_empty());

    trie.insert_word(&long);
    let copy = trie.clone();
    assert_eq!(trie, copy);
    drop(trie);
    assert!(copy.search_word(&long));
}
