//! Path resolution for the launcher's project tree.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle presentation separately
//! - The project root is resolved once and every other path derives from it

mod error;
mod layout;
mod root;

pub use error::PathError;
pub use layout::{
    DOWNLOADER_DIR_RELATIVE, ProjectLayout, WEB_DIR_RELATIVE, WRAPPER_DIR_RELATIVE,
};
pub use root::resolve_project_root;
