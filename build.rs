//! Build script to generate the embedded dictionary
//!
//! Turns `data/words.txt` into a const array. Order is preserved because the
//! word of the day indexes into it.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let mut seen = HashSet::new();
    let mut entries = String::new();
    for (line_no, word) in content
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
    {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{WORD_LIST}:{}: '{word}' is not a lowercase ASCII word",
            line_no + 1
        );
        assert!(
            seen.insert(word),
            "{WORD_LIST}:{}: duplicate word '{word}'",
            line_no + 1
        );
        let _ = writeln!(entries, "    \"{word}\",");
    }

    let generated = format!(
        "// Generated from {WORD_LIST}\n\n\
         /// Dictionary of playable words, in word-of-the-day order\n\
         pub const WORDS: &[&str] = &[\n{entries}];\n\n\
         /// Number of words in WORDS\n\
         pub const WORDS_COUNT: usize = {};\n",
        seen.len()
    );

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, generated)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}
