//! Fixed project layout derived from the project root.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Wrapper directory, relative to the project root.
pub const WRAPPER_DIR_RELATIVE: &str = "apps/wrapper";
/// Downloader repository directory, relative to the project root.
pub const DOWNLOADER_DIR_RELATIVE: &str = "apps/apple-music-downloader";
/// Delegated web application directory, relative to the project root.
pub const WEB_DIR_RELATIVE: &str = "apps/web";

const WRAPPER_BINARY_NAME: &str = "wrapper";
const WRAPPER_ROOTFS_NAME: &str = "rootfs";

/// All paths the bootstrap sequence reads or writes.
///
/// Built once from the project root; nothing here is re-resolved later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub wrapper_dir: PathBuf,
    pub wrapper_binary: PathBuf,
    pub wrapper_rootfs: PathBuf,
    pub downloader_dir: PathBuf,
    pub web_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let wrapper_dir = root.join(WRAPPER_DIR_RELATIVE);
        Self {
            wrapper_binary: wrapper_dir.join(WRAPPER_BINARY_NAME),
            wrapper_rootfs: wrapper_dir.join(WRAPPER_ROOTFS_NAME),
            downloader_dir: root.join(DOWNLOADER_DIR_RELATIVE),
            web_dir: root.join(WEB_DIR_RELATIVE),
            wrapper_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Wrapper paths that do not exist on disk, in (binary, rootfs) order.
    pub fn missing_wrapper_paths(&self) -> Vec<PathBuf> {
        [&self.wrapper_binary, &self.wrapper_rootfs]
            .into_iter()
            .filter(|path| !path.exists())
            .cloned()
            .collect()
    }

    /// Labelled listing of every path, used by `amdl paths`.
    pub fn entries(&self) -> [(&'static str, &Path); 6] {
        [
            ("Project root", self.root.as_path()),
            ("Wrapper dir", self.wrapper_dir.as_path()),
            ("Wrapper binary", self.wrapper_binary.as_path()),
            ("Wrapper rootfs", self.wrapper_rootfs.as_path()),
            ("Downloader", self.downloader_dir.as_path()),
            ("Web app", self.web_dir.as_path()),
        ]
    }
}
