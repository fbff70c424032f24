use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Extension of animation clip files.
pub const ASSET_EXTENSION: &str = ".mp4";

/// Membership query against an animation library.
pub trait AssetLibrary: Send + Sync {
    /// Whether a clip named `file_name` (e.g. `"go.mp4"`) exists.
    fn exists(&self, file_name: &str) -> bool;
}

/// File name of the clip for `token`.
pub fn asset_file_name(token: &str) -> String {
    format!("{}{}", token, ASSET_EXTENSION)
}

/// Library backed by a directory of clip files.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLibrary for DirectoryAssets {
    fn exists(&self, file_name: &str) -> bool {
        // Only plain names: never let a token walk out of the library.
        if file_name.is_empty()
            || file_name.contains(&['/', '\\'][..])
            || file_name.starts_with('.')
        {
            return false;
        }
        self.root.join(file_name).is_file()
    }
}

/// In-memory library.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    files: HashSet<String>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding a clip for each token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            files: tokens
                .into_iter()
                .map(|t| asset_file_name(t.as_ref()))
                .collect(),
        }
    }
}

impl AssetLibrary for StaticAssets {
    fn exists(&self, file_name: &str) -> bool {
        self.files.contains(file_name)
    }
}
