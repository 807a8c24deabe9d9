//! Host application directory layout.

use std::path::PathBuf;

use crate::constants::DEFAULT_CONTENT_DIR_NAME;
use crate::loader::ConfigError;

/// Directories of the host application used to build the default candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Application root directory.
    pub root: PathBuf,
    /// Application content directory (defaults to `<root>/content`).
    pub content_dir: PathBuf,
}

impl AppPaths {
    /// Create a layout rooted at `root` with the default content directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let content_dir = root.join(DEFAULT_CONTENT_DIR_NAME);
        Self { root, content_dir }
    }

    /// Create a layout rooted at the current working directory.
    pub fn current() -> Result<Self, ConfigError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Replace the content directory.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// The built-in candidate list: root, root's parent, content directory.
    ///
    /// The parent entry is omitted when the root has no parent (e.g. `/`).
    pub fn default_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.root.clone()];
        if let Some(parent) = self.root.parent().filter(|p| !p.as_os_str().is_empty()) {
            candidates.push(parent.to_path_buf());
        }
        candidates.push(self.content_dir.clone());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_order() {
        let paths = AppPaths::new("/srv/site/public");
        assert_eq!(
            paths.default_candidates(),
            vec![
                PathBuf::from("/srv/site/public"),
                PathBuf::from("/srv/site"),
                PathBuf::from("/srv/site/public/content"),
            ]
        );
    }

    #[test]
    fn test_default_candidates_without_parent() {
        let paths = AppPaths::new("/").with_content_dir("/content");
        assert_eq!(
            paths.default_candidates(),
            vec![PathBuf::from("/"), PathBuf::from("/content")]
        );
    }

    #[test]
    fn test_relative_root_without_parent_skips_empty_parent() {
        let paths = AppPaths::new("site");
        assert_eq!(
            paths.default_candidates(),
            vec![PathBuf::from("site"), PathBuf::from("site/content")]
        );
    }

    #[test]
    fn test_with_content_dir_overrides_default() {
        let paths = AppPaths::new("/srv/site").with_content_dir("/var/content");
        assert_eq!(paths.content_dir, PathBuf::from("/var/content"));
        assert_eq!(paths.root, PathBuf::from("/srv/site"));
    }
}
