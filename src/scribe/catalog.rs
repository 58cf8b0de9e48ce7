//! Class catalog listing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::scribe::class::Class;
use crate::scribe::library::{Library, CARD_IMAGE_EXT};
use crate::scribe::resolver::title_case;

/// Errors from listing a class directory.
#[derive(Debug)]
pub enum CatalogError {
    /// The class is recognized but its directory is absent from the library.
    DirectoryMissing(PathBuf),
    /// Any other filesystem failure.
    Io(io::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryMissing(dir) => {
                write!(f, "class directory '{}' is missing", dir.display())
            }
            Self::Io(source) => write!(f, "failed to list class directory: {}", source),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryMissing(_) => None,
            Self::Io(source) => Some(source),
        }
    }
}

/// List the display names of every card image in `class`'s directory,
/// extension-stripped and space-normalized, in lexical listing order.
///
/// The class itself is validated by the router before this is called; a
/// missing directory here is an operational inconsistency, reported as
/// [`CatalogError::DirectoryMissing`].
pub fn list_class(library: &Library, class: Class) -> Result<Vec<String>, CatalogError> {
    let dir = library.class_dir(class);
    let reader = match std::fs::read_dir(&dir) {
        Ok(reader) => reader,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::DirectoryMissing(dir));
        }
        Err(e) => return Err(CatalogError::Io(e)),
    };

    let mut stems = Vec::new();
    for entry in reader {
        let path = entry.map_err(CatalogError::Io)?.path();
        if !path.is_file()
            || path
                .extension()
                .and_then(|e| e.to_str())
                .is_none_or(|e| !e.eq_ignore_ascii_case(CARD_IMAGE_EXT))
        {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.push(stem.to_string());
        }
    }
    stems.sort();

    Ok(stems
        .iter()
        .map(|stem| title_case(&stem.replace('_', " ")))
        .collect())
}
