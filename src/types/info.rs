use std::{ffi::OsStr, path::PathBuf};

/// One discovered frame file and the index parsed from its name
#[derive(Debug)]
pub struct FrameRef {
    pub path: PathBuf,
    pub index: u64,
}

impl FrameRef {
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }
}
