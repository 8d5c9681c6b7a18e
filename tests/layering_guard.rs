//! Layering guardrails for the workspace crates.
//!
//! - `scriptcheck_core` is the vocabulary layer and must stay dependency-free.
//! - `scriptcheck_syntax` may depend on `scriptcheck_core` but never on the CLI crate (`scriptcheck`).
//!
//! These tests scan the member manifests and fail if a forbidden entry appears in `[dependencies]`.

/// Dependency names listed in a manifest's `[dependencies]` table.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/scriptcheck_core/Cargo.toml");
    let deps = main_dependencies(manifest);
    assert!(deps.is_empty(), "`scriptcheck_core` must stay dependency-free, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_cli() {
    let manifest = include_str!("../crates/scriptcheck_syntax/Cargo.toml");
    let deps = main_dependencies(manifest);
    assert!(deps.iter().any(|d| d == "scriptcheck_core"), "found {:?}", deps);
    assert!(
        !deps.iter().any(|d| d == "scriptcheck"),
        "`scriptcheck` must not appear in scriptcheck_syntax [dependencies]"
    );
}

#[test]
fn cli_uses_core_only_for_tests() {
    let manifest = include_str!("../Cargo.toml");
    let deps = main_dependencies(manifest);
    assert!(
        !deps.iter().any(|d| d == "scriptcheck_core"),
        "`scriptcheck_core` must not appear in [dependencies]; the CLI reaches vocabulary through scriptcheck_syntax"
    );
}
