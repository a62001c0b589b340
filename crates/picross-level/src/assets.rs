use std::path::{Path, PathBuf};

/// Locations of level images on disk.
///
/// Level `name` is read from `<images_dir>/<name>.png`; its decorative reveal
/// picture is `<images_dir>/<name>_solved.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// Directory containing level images.
    pub images_dir: PathBuf,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
        }
    }
}

impl AssetLayout {
    /// Creates a layout whose image directory is `images/` under `root`.
    #[must_use]
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            images_dir: root.as_ref().join("images"),
        }
    }

    /// Returns the path of the image a level's solution is read from.
    #[must_use]
    pub fn image_path(&self, name: &str) -> PathBuf {
        self.images_dir.join(format!("{name}.png"))
    }

    /// Returns the path of a level's reveal picture.
    #[must_use]
    pub fn solved_image_path(&self, name: &str) -> PathBuf {
        self.images_dir.join(format!("{name}_solved.png"))
    }
}
