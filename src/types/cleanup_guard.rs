use std::{fs, path::PathBuf};

/// Removes a partially written output file unless the write is committed.
pub struct OutputGuard {
    path: PathBuf,
    armed: bool,
}

impl OutputGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    pub fn commit(mut self) {
        self.armed = false;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if self.armed && self.path.is_file() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
