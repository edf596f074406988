//! Ordering tests for the Pali collator.
//! Fixture cases live in data/sort_cases.json.

use std::cmp::Ordering;
use std::path::Path;

use pali_sort::{Alphabet, PaliCollator};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SortCase {
    id: usize,
    description: String,
    input: Vec<String>,
    expected: Vec<String>,
}

fn load_cases() -> Vec<SortCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sort_cases.json");
    let json = std::fs::read_to_string(&path).expect("Failed to read sort cases");
    serde_json::from_str(&json).expect("Failed to parse sort cases")
}

const VOCABULARY: &[&str] = &[
    "buddha", "dhamma", "saṅgha", "nibbāna", "kamma", "khandha", "citta", "ñāṇa", "paññā",
    "sīla", "mettā", "ṭhāna", "ḍahati", "ahaṃ", "ābādha", "idha", "ehi", "okāsa", "gacchati",
    "jhāna", "bhikkhu", "phala", "thera", "yathā", "rūpa", "vedanā", "loka", "hoti", "maṅgala",
    "ujju", "ūmi", "iṇa", "īsa", "k", "ka", "kh", "kha", "",
];

#[test]
fn test_all_cases_match_expected() {
    let collator = PaliCollator::pali();
    let cases = load_cases();
    let mut failures = Vec::new();

    for case in &cases {
        let sorted = collator.sort_words(case.input.clone());
        if sorted != case.expected {
            failures.push(format!(
                "[{}] {}\n  Expected: {:?}\n  Actual: {:?}",
                case.id, case.description, case.expected, sorted
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{}/{} sort cases failed:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_parallel_sort_matches_sequential() {
    let collator = PaliCollator::pali();
    for case in load_cases() {
        let sorted = collator.sort_words_par(case.input.clone());
        assert_eq!(sorted, case.expected, "case {}", case.id);
    }
}

#[test]
fn test_alphabet_fidelity() {
    assert_eq!(pali_sort::sort(vec!["pa", "ka", "kha"]), vec!["ka", "kha", "pa"]);
}

#[test]
fn test_digraph_boundary() {
    assert_eq!(pali_sort::sort(vec!["kha", "ka"]), vec!["ka", "kha"]);
    // "kh" + anything sorts after "k" + anything
    assert!(pali_sort::less_than("kū", "kha"));
    assert!(pali_sort::less_than("kṃ", "kha"));
}

#[test]
fn test_prefix_rule() {
    assert!(pali_sort::less_than("k", "ka"));
    assert!(!pali_sort::less_than("ka", "k"));
    assert!(pali_sort::less_than("", "a"));
    assert!(!pali_sort::less_than("", ""));
}

#[test]
fn test_equal_words_are_not_less() {
    for word in VOCABULARY {
        assert!(!pali_sort::less_than(word, word), "{word} < itself");
    }
}

#[test]
fn test_vowels_before_consonants() {
    assert!(pali_sort::less_than("ā", "i"));
    assert!(pali_sort::less_than("o", "k"));
    assert!(pali_sort::less_than("saṅgha", "sīla"));
}

#[test]
fn test_unknown_characters_sort_last() {
    assert!(pali_sort::less_than("ṃ", "x"));
    assert!(pali_sort::less_than("ka", "kx"));
    assert!(pali_sort::less_than("kaṃ", "kaq"));
}

#[test]
fn test_unknown_characters_collapse_to_one_rank() {
    // Same byte length, different text: neither is less.
    for (x, y) in [("x", "z"), ("é", "ü"), ("xa", "za"), ("Ka", "Xa")] {
        assert!(!pali_sort::less_than(x, y), "{x} < {y}");
        assert!(!pali_sort::less_than(y, x), "{y} < {x}");
        assert_eq!(PaliCollator::pali().compare(x, y), Ordering::Equal);
    }
}

#[test]
fn test_unknown_tie_falls_back_to_byte_length() {
    // Every unit pair ties, so the shorter byte string wins.
    assert!(pali_sort::less_than("z", "é"));
    assert!(pali_sort::less_than("xya", "éé"));
}

#[test]
fn test_ordering_is_transitive() {
    let collator = PaliCollator::pali();
    for a in VOCABULARY {
        for b in VOCABULARY {
            for c in VOCABULARY {
                if collator.less_than(a, b) && collator.less_than(b, c) {
                    assert!(collator.less_than(a, c), "{a} < {b} < {c} but not {a} < {c}");
                }
            }
        }
    }
}

#[test]
fn test_ordering_is_antisymmetric() {
    let collator = PaliCollator::pali();
    for a in VOCABULARY {
        for b in VOCABULARY {
            let forward = collator.compare(a, b);
            assert_eq!(forward.reverse(), collator.compare(b, a), "{a} vs {b}");
            assert_eq!(forward == Ordering::Less, collator.less_than(a, b));
        }
    }
}

#[test]
fn test_legacy_agrees_on_alphabet_words() {
    let collator = PaliCollator::pali();
    for a in VOCABULARY {
        for b in VOCABULARY {
            assert_eq!(
                collator.less_than(a, b),
                collator.less_than_legacy(a, b),
                "{a} vs {b}"
            );
        }
    }
}

#[test]
fn test_legacy_counts_units_at_end_of_input() {
    let collator = PaliCollator::pali();
    // Three one-byte unknowns against two two-byte unknowns.
    assert!(collator.less_than("xya", "éé"));
    assert!(!collator.less_than_legacy("xya", "éé"));
    assert!(!collator.less_than("éé", "xya"));
    assert!(collator.less_than_legacy("éé", "xya"));
}

#[test]
fn test_legacy_does_not_index_past_shorter_word() {
    let collator = PaliCollator::pali();
    assert!(!collator.less_than_legacy("kaka", "ka"));
    assert!(collator.less_than_legacy("ka", "kaka"));
    assert!(!collator.less_than_legacy("a", ""));
}

#[test]
fn test_sort_key_is_rank_sequence() {
    let collator = PaliCollator::pali();
    assert_eq!(collator.sort_key("kha"), vec![9, 0]);
    assert_eq!(collator.sort_key("ṭhāna"), vec![19, 1, 27, 0]);
    assert_eq!(collator.sort_key("ax"), vec![0, 41]);
    assert!(collator.sort_key("").is_empty());
}

#[test]
fn test_sort_in_place() {
    let mut words = vec!["phala".to_string(), "pa".to_string(), "bhava".to_string()];
    PaliCollator::pali().sort_in_place(&mut words);
    assert_eq!(words, vec!["pa", "phala", "bhava"]);
}

#[test]
fn test_custom_alphabet_reorders() {
    // Reverse alphabet: later letters sort first.
    let alphabet = Alphabet::from_entries(["p", "kh", "k", "a"]).expect("valid alphabet");
    let collator = PaliCollator::new(&alphabet);
    assert_eq!(
        collator.sort_words(vec!["ka", "kha", "pa"]),
        vec!["pa", "kha", "ka"]
    );
}

#[test]
fn test_sort_empty_list() {
    let sorted: Vec<String> = pali_sort::sort(Vec::new());
    assert!(sorted.is_empty());
}

// 1-, 2- and 3-byte unknowns mixed with alphabet letters, including "h" so aspirates form.
const MIXED_CHARS: &[&str] = &["x", "z", "é", "ü", "ḫ", "ṭ", "a", "k", "h"];

/// Deterministic word lists (xorshift), so failures reproduce.
fn mixed_word_lists(lists: usize, words_per_list: usize) -> Vec<Vec<String>> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move |bound: usize| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % bound as u64) as usize
    };

    let mut lists_out = Vec::with_capacity(lists);
    for _ in 0..lists {
        let mut words = Vec::with_capacity(words_per_list);
        for _ in 0..words_per_list {
            let len = next(4);
            let word: String = (0..len).map(|_| MIXED_CHARS[next(MIXED_CHARS.len())]).collect();
            words.push(word);
        }
        lists_out.push(words);
    }
    lists_out
}

fn assert_settled(input: &[String], sorted: &[String]) {
    let mut expected = input.to_vec();
    let mut actual = sorted.to_vec();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected, "not a permutation of {input:?}");

    for pair in sorted.windows(2) {
        assert!(
            !pali_sort::less_than(&pair[1], &pair[0]),
            "{:?} sorted before {:?} in {sorted:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_less_than_cycle_among_unknowns() {
    // Unknowns tie, then byte length decides, so the order has a cycle.
    assert!(pali_sort::less_than("éé", "xxṭ"));
    assert!(pali_sort::less_than("xxṭ", "xxx"));
    assert!(pali_sort::less_than("xxx", "éé"));

    let input: Vec<String> = ["xxx", "xxṭ", "éé"].iter().map(|w| w.to_string()).collect();
    let sorted = pali_sort::sort(input.clone());
    assert_settled(&input, &sorted);
}

#[test]
fn test_sort_survives_mixed_width_unknowns() {
    let collator = PaliCollator::pali();
    for input in mixed_word_lists(500, 40) {
        assert_settled(&input, &pali_sort::sort(input.clone()));
        assert_settled(&input, &collator.sort_words(input.clone()));
        assert_settled(&input, &collator.sort_words_par(input.clone()));
    }
}

#[test]
fn test_sort_mixed_width_unknown_single_letters() {
    let input: Vec<String> = ["é", "za", "zk", "x", "ḫ", "a", "", "ṭa", "ü"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let sorted = PaliCollator::pali().sort_words(input.clone());
    assert_settled(&input, &sorted);
    assert_eq!(sorted[0], "");
    assert_eq!(sorted[1], "a");
}
