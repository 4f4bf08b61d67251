//! Error kinds for composedot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Every kind is fatal; callers match on it to pick a diagnostic and an
/// exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Usage errors
    // =========================================================================
    /// Command line was missing the input path or carried unknown arguments
    Usage,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// The compose document is not well-formed or a field has the wrong shape
    ParseFailed,

    // =========================================================================
    // Graph errors
    // =========================================================================
    /// A node or edge was rejected by the graph structure
    GraphBuildFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Process exit status for this kind.
    ///
    /// Usage errors exit with 2, matching the argument parser; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            _ => 1,
        }
    }
}
