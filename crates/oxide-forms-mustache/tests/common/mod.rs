#![allow(dead_code)]

use std::fs;

use oxide_forms::fields::text_field;
use oxide_forms::{FieldSet, FieldValue, Record};
use tempfile::TempDir;

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Creates a temporary template directory holding `files`.
pub fn template_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create tempdir: {e}"));
    for (name, content) in files {
        fs::write(dir.path().join(name), content)
            .unwrap_or_else(|e| panic!("Failed to write {name}: {e}"));
    }
    dir
}

/// A two-column fieldset: `name` ("Name") and `text` ("Text").
pub fn people() -> FieldSet {
    FieldSet::new()
        .field(text_field("name", "Name", 100, false))
        .field(text_field("text", "Text", 100, false))
}

pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), FieldValue::from(*v)))
        .collect()
}
