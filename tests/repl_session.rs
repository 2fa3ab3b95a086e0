//! Integration tests driving full interactive sessions end to end
//! through the public library API.

use std::io::Cursor;

use namebook_lib::repl;
use namebook_lib::store::{JumpStore, NameStore, NameTrie, ScanStore};

fn run_session<S: NameStore>(store: &mut S, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(store, Cursor::new(script), &mut output).expect("session failed");
    String::from_utf8(output).expect("session output is valid utf-8")
}

#[test]
fn test_scripted_session_counts_prefixes() {
    let script = "add james\nadd jordge\nadd jacob\nfind j\nfind ja\nfind james\n";
    let mut store = NameTrie::new();

    let output = run_session(&mut store, script);

    assert_eq!(
        output,
        "Enter action: \
         \nEnter action: \
         \nEnter action: \
         \nEnter action: 3\n\
         \nEnter action: 2\n\
         \nEnter action: 1\n\
         \nEnter action: "
    );
}

#[test]
fn test_session_recovers_from_every_error_kind() {
    let script = "\nadd\nremove james\nadd anna\nadd anna\nfind anna\n";
    let mut store = NameTrie::new();

    let output = run_session(&mut store, script);

    assert!(output.contains("Error: input cannot be empty"));
    assert!(output.contains("Error: expected exactly two arguments, got 1"));
    assert!(output.contains("Error: unknown action 'remove', expected 'add' or 'find'"));
    assert!(output.contains("Error: name 'anna' already exists in the notebook"));
    assert!(output.ends_with("Enter action: 1\n\nEnter action: "));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_session_with_punctuated_input_and_mixed_case() {
    let script = "ADD, Harry!\nFIND -- h\n";
    let mut store = NameTrie::new();

    let output = run_session(&mut store, script);

    assert!(output.ends_with("Enter action: 1\n\nEnter action: "));
}

#[test]
fn test_preloaded_session_matches_seeded_notebook() {
    // The seed list of the original notebook, loaded before the session.
    let seed = "james\nharry\nanna\nalisa\njordge\njacob\nandrew\n";
    let mut store = NameTrie::new();
    repl::preload(&mut store, Cursor::new(seed)).expect("preload failed");

    let output = run_session(&mut store, "find a\nfind ja\nfind harry\n");

    assert_eq!(
        output,
        "Enter action: 3\n\
         \nEnter action: 2\n\
         \nEnter action: 1\n\
         \nEnter action: "
    );
}

#[test]
fn test_all_backends_produce_identical_sessions() {
    let script = "add anna\nadd an\nadd anna\nfind an\nfind anna\nfind x\n";

    let mut trie = NameTrie::new();
    let mut jump = JumpStore::new();
    let mut scan = ScanStore::new();

    let from_trie = run_session(&mut trie, script);
    let from_jump = run_session(&mut jump, script);
    let from_scan = run_session(&mut scan, script);

    assert_eq!(from_trie, from_jump);
    assert_eq!(from_trie, from_scan);
    assert!(from_trie.contains("Error: name 'anna' already exists in the notebook"));
}
