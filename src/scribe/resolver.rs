//! Card lookup: recursive case-insensitive stem search over the image tree.

use std::io;
use std::path::{Path, PathBuf};

use crate::scribe::library::CARD_IMAGE_EXT;

/// A card lookup built from the user's argument tokens.
///
/// The key is the lowercased, underscore-joined form matched against file
/// stems; the display form is what replies show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    key: String,
    display: String,
}

impl CardQuery {
    pub fn from_tokens(tokens: &[String]) -> Self {
        let joined = tokens.join("_");
        let display = title_case(&joined.replace('_', " "));
        Self {
            key: joined.to_lowercase(),
            display,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Locate the image for `query` somewhere under `root`.
///
/// Depth-first: image files at each level are checked before descending, and
/// children are visited in lexical name order so traversal is deterministic.
/// Returns the path of the entry actually discovered, or `None` when the whole
/// subtree holds no match. An empty key is not-found without any traversal.
pub fn resolve(query: &CardQuery, root: &Path) -> io::Result<Option<PathBuf>> {
    if query.key().is_empty() {
        return Ok(None);
    }
    search(query.key(), root)
}

fn search(key: &str, dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();

    for path in entries.iter().filter(|p| p.is_file()) {
        if !is_card_image(path) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            && stem.to_lowercase() == key
        {
            return Ok(Some(path.clone()));
        }
    }

    for path in entries.iter().filter(|p| p.is_dir()) {
        if let Some(found) = search(key, path)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

fn is_card_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(CARD_IMAGE_EXT))
}

/// Title-case a space-separated name, the display form used in replies.
pub(crate) fn title_case(raw: &str) -> String {
    raw.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
