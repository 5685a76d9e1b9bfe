//! Test utilities & fixtures.
//! Provides access to the JSON fixtures under `tests/fixtures`.

use std::path::{Path, PathBuf};

/// Return the path to the static fixture directory.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a single fixture file.
#[allow(dead_code)] // Not every test binary uses every helper.
pub fn fixture(name: &str) -> PathBuf {
    fixture_root().join(name)
}
