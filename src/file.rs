//! Source file loading and saving
//!
//! Plain UTF-8 text, no project format, no editor-state persistence.

use std::io;
use std::path::Path;

pub fn load(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

pub fn save(path: &Path, text: &str) -> io::Result<()> {
    std::fs::write(path, text)
}
