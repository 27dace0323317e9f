//! Source lines stay within the 100-column width set in `rustfmt.toml`.

use std::fs;
use std::path::{Path, PathBuf};

const MAX_WIDTH: usize = 100;

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_line_exceeds_the_configured_width() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    for dir in ["crates", "src", "tests"] {
        rust_files(&root.join(dir), &mut files);
    }
    assert!(!files.is_empty());

    let mut too_long = Vec::new();
    for file in &files {
        let source = fs::read_to_string(file).unwrap();
        for (number, line) in source.lines().enumerate() {
            if line.chars().count() > MAX_WIDTH {
                too_long.push(format!("{}:{}", file.display(), number + 1));
            }
        }
    }
    assert!(too_long.is_empty(), "lines over {MAX_WIDTH} columns:\n{}", too_long.join("\n"));
}
