//! Generate a Markdown reference page from `scriptcheck_core::lang` registries.
//!
//! Renders keywords, literal words, operators and punctuation into `docs/language/reference.md`.
//!
//! ## Notes
//! - The generated file is a derived artifact; update the registries instead of editing it by hand.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p scriptcheck_core --bin generate_lang_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use scriptcheck_core::lang::{keywords, literals, operators, punctuation};

fn main() {
    let out_dir = workspace_root().join("docs/language");
    fs::create_dir_all(&out_dir).expect("create docs/language/");

    let out = render_reference();
    fs::write(out_dir.join("reference.md"), out).expect("write reference.md");
}

fn render_reference() -> String {
    let mut out = String::new();
    out.push_str("# Language vocabulary reference\n\n");
    out.push_str("> Generated file. Regenerate with `cargo run -p scriptcheck_core --bin generate_lang_reference`.\n\n");

    render_keywords_section(&mut out);
    render_literals_section(&mut out);
    render_operators_section(&mut out);
    render_punctuation_section(&mut out);

    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn render_keywords_section(out: &mut String) {
    out.push_str("## Keywords\n\n");
    out.push_str("| Id | Canonical | Category | Usage | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|---|\n");

    for k in keywords::KEYWORDS {
        out.push_str(&format!(
            "| {:?} | `{}` | {:?} | {:?} | {} | {:?} |\n",
            k.id, k.canonical, k.category, k.usage, k.since, k.stability
        ));
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    for k in keywords::KEYWORDS {
        if k.examples.is_empty() {
            continue;
        }
        out.push_str(&format!("#### `{}`\n\n", k.canonical));
        for ex in k.examples {
            out.push_str("```js\n");
            out.push_str(ex.code);
            out.push_str("\n```\n\n");
            if let Some(note) = ex.note {
                out.push_str(note);
                out.push_str("\n\n");
            }
        }
    }
}

fn render_literals_section(out: &mut String) {
    out.push_str("## Literal words\n\n");
    out.push_str("| Id | Canonical | Token class | Since |\n");
    out.push_str("|---|---|---|---|\n");
    for w in literals::LITERAL_WORDS {
        out.push_str(&format!("| {:?} | `{}` | {:?} | {} |\n", w.id, w.canonical, w.class, w.since));
    }
    out.push('\n');
}

fn render_operators_section(out: &mut String) {
    out.push_str("## Operators\n\n");
    out.push_str("| Id | Canonical | Category | Since |\n");
    out.push_str("|---|---|---|---|\n");
    for o in operators::OPERATORS {
        // Pipes would split the table cell.
        let canonical = o.canonical.replace('|', "\\|");
        out.push_str(&format!("| {:?} | `{}` | {:?} | {} |\n", o.id, canonical, o.category, o.since));
    }
    out.push('\n');
}

fn render_punctuation_section(out: &mut String) {
    out.push_str("## Punctuation\n\n");
    out.push_str("| Id | Canonical | Category | Since |\n");
    out.push_str("|---|---|---|---|\n");
    for p in punctuation::PUNCTUATION {
        out.push_str(&format!("| {:?} | `{}` | {:?} | {} |\n", p.id, p.canonical, p.category, p.since));
    }
    out.push('\n');
}

fn workspace_root() -> PathBuf {
    // crates/scriptcheck_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/scriptcheck_core)")
}
