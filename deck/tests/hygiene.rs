//! Hygiene: coding standards for the deck engine and the client that drives it.
//!
//! Both crates are scanned line by line for patterns with a per-crate budget.
//! Budgets only move down. The deck also has hard bans: it is a pure state
//! machine driven by the host, so wall clocks, threads and browser or UI
//! bindings never appear in it.

use std::fs;
use std::path::Path;

/// Crate roots, relative to `deck/` (where cargo runs integration tests).
const DECK_SRC: &str = "src";
const CLIENT_SRC: &str = "../client/src";

struct Budget {
    pattern: &'static str,
    deck: usize,
    client: usize,
}

// Panics crash the tab; the client propagates or logs instead.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", deck: 0, client: 0 },
    Budget { pattern: ".expect(", deck: 0, client: 0 },
    Budget { pattern: "panic!(", deck: 0, client: 0 },
    Budget { pattern: "unreachable!(", deck: 0, client: 0 },
    Budget { pattern: "todo!(", deck: 0, client: 0 },
    Budget { pattern: "unimplemented!(", deck: 0, client: 0 },
];

// Client sites: pointer capture and release, the SSR timer stub, and the
// console logger init (fails only if a logger is already installed).
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", deck: 0, client: 4 },
    Budget { pattern: ".ok()", deck: 0, client: 0 },
];

const LINT_ESCAPES: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", deck: 0, client: 0 },
    Budget { pattern: "#[allow(unused", deck: 0, client: 0 },
];

const DECK_CLOCKS_AND_THREADS: &[&str] = &["std::time", "Instant", "SystemTime", "std::thread"];
const DECK_UI_BINDINGS: &[&str] = &["leptos", "web_sys", "wasm_bindgen", "gloo"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `root`; `*_test.rs` companions are skipped.
fn source_files(root: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(root), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file hit counts for `pattern`, ignoring `//` comment lines.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every budget overrun across both crates, one message per pattern.
fn overruns(budgets: &[Budget]) -> Vec<String> {
    let deck = source_files(DECK_SRC);
    let client = source_files(CLIENT_SRC);
    let mut out = Vec::new();
    for budget in budgets {
        for (name, files, max) in [("deck", &deck, budget.deck), ("client", &client, budget.client)] {
            let found = hits(files, budget.pattern);
            let count: usize = found.iter().map(|(_, c)| c).sum();
            if count > max {
                out.push(format!(
                    "{name}: `{}` found {count}, max {max}\n{}",
                    budget.pattern,
                    format_hits(&found)
                ));
            }
        }
    }
    out
}

fn banned_in_deck(patterns: &[&str]) -> Vec<String> {
    let deck = source_files(DECK_SRC);
    patterns
        .iter()
        .flat_map(|pattern| hits(&deck, pattern).into_iter().map(move |(path, n)| format!("  {path}: {n}x `{pattern}`")))
        .collect()
}

#[test]
fn both_crates_are_scanned() {
    let deck = source_files(DECK_SRC);
    let client = source_files(CLIENT_SRC);
    assert!(deck.iter().any(|f| f.path.ends_with("engine.rs")), "deck sources not found under {DECK_SRC}");
    assert!(client.iter().any(|f| f.path.ends_with("swipe_cards.rs")), "client sources not found under {CLIENT_SRC}");
    assert!(deck.iter().chain(&client).all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn panicking_calls_within_budget() {
    let over = overruns(PANICS);
    assert!(over.is_empty(), "panic budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn silent_discards_within_budget() {
    let over = overruns(DISCARDS);
    assert!(over.is_empty(), "discard budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn lint_escapes_within_budget() {
    let over = overruns(LINT_ESCAPES);
    assert!(over.is_empty(), "lint escape budget exceeded:\n{}", over.join("\n"));
}

#[test]
fn deck_has_no_clocks_or_threads() {
    let found = banned_in_deck(DECK_CLOCKS_AND_THREADS);
    assert!(
        found.is_empty(),
        "deck must take time from the host (exit tokens + delay_ms):\n{}",
        found.join("\n")
    );
}

#[test]
fn deck_has_no_ui_bindings() {
    let found = banned_in_deck(DECK_UI_BINDINGS);
    assert!(found.is_empty(), "deck must stay UI-agnostic:\n{}", found.join("\n"));
}
