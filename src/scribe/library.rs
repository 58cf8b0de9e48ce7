//! Location of the card image tree on disk.

use std::path::{Path, PathBuf};

use crate::scribe::class::Class;

/// Deploy-time location of the image tree, relative to the working directory.
const CARD_IMAGE_ROOT: &str = "card_images/chronicle_rewritten_card_images";

/// Extension carried by every card image in the tree.
pub const CARD_IMAGE_EXT: &str = "png";

/// The on-disk card library: one subdirectory per class, one image per card,
/// externally populated and never written by the bot.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The subdirectory holding one class's cards.
    pub fn class_dir(&self, class: Class) -> PathBuf {
        self.root.join(class.dir_name())
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(CARD_IMAGE_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_dir_joins_title_case_name() {
        let library = Library::new("/srv/cards");
        assert_eq!(
            library.class_dir(Class::Ozan),
            PathBuf::from("/srv/cards/Ozan")
        );
    }

    #[test]
    fn test_default_root_is_the_deploy_layout() {
        let library = Library::default();
        assert!(library.root().ends_with("chronicle_rewritten_card_images"));
    }
}
