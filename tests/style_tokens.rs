use std::fs;
use std::path::{Path, PathBuf};

const TAILWIND_CONFIG: &str = include_str!("../tailwind.config.js");

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("read src dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Every class token in `src/` starting with `prefix`, with the prefix removed.
fn tokens_after(prefix: &str) -> Vec<String> {
    let mut files = Vec::new();
    rust_sources(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src")), &mut files);

    let mut tokens = Vec::new();
    for file in files {
        let text = fs::read_to_string(&file).expect("read source");
        for (at, _) in text.match_indices(prefix) {
            let rest: String = text[at + prefix.len()..]
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect();
            tokens.push(rest);
        }
    }
    tokens.sort();
    tokens.dedup();
    tokens
}

fn config_defines(key: &str) -> bool {
    TAILWIND_CONFIG.contains(&format!("{key}:")) || TAILWIND_CONFIG.contains(&format!("\"{key}\":"))
}

#[test]
fn test_accent_colors_are_configured() {
    let used = tokens_after("accent-");
    assert!(!used.is_empty());
    for color in used {
        assert!(config_defines(&color), "accent-{color} missing from tailwind.config.js");
    }
}

#[test]
fn test_apple_radius_and_shadow_are_configured() {
    for prefix in ["rounded-", "shadow-"] {
        for token in tokens_after(prefix) {
            if token.starts_with("apple") {
                assert!(config_defines(&token), "{prefix}{token} missing from tailwind.config.js");
            }
        }
    }
    assert!(config_defines("apple-lg"));
}
