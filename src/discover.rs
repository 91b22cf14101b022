use crate::types::info::FrameRef;
use anyhow::{Context, Result, bail};
use regex::Regex;
use std::{
    ffi::OsStr,
    fs,
    path::Path,
    sync::LazyLock,
};
use tracing::{debug, warn};

pub const FRAME_EXTENSION: &str = "bmp";

static FRAME_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)frame-(\d+)\.bmp$").expect("frame name pattern is valid")
});

/// Parses the index out of `frame-<n>.bmp`; anything else is frame 0
pub fn frame_index(file_name: &str) -> u64 {
    let Some(caps) = FRAME_NAME.captures(file_name) else {
        warn!("{file_name} does not match frame-<n>.{FRAME_EXTENSION}, using index 0");
        return 0;
    };
    caps[1].parse().unwrap_or_else(|_| {
        warn!("Frame number in {file_name} is too large, using index 0");
        0
    })
}

fn is_frame_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION))
}

/// Lists the BMP files directly inside `target_dir`, ordered by frame index.
/// Equal indices fall back to file name order.
pub fn discover_frames(target_dir: &Path) -> Result<Vec<FrameRef>> {
    if !target_dir.exists() {
        bail!("Target directory '{}' does not exist", target_dir.display());
    }
    if !target_dir.is_dir() {
        bail!("Target path '{}' is not a directory", target_dir.display());
    }

    let entries = fs::read_dir(target_dir)
        .with_context(|| format!("Failed to read target directory: {target_dir:?}"))?;

    let mut frames = Vec::new();
    for entry_res in entries {
        let path = entry_res
            .with_context(|| format!("Failed to list target directory: {target_dir:?}"))?
            .path();

        if !is_frame_file(&path) {
            continue;
        }
        let name = path.file_name().unwrap_or_default();
        if name.to_str().is_none() {
            warn!("{path:?} is not valid UTF-8, reading its frame number from a lossy copy");
        }
        let index = frame_index(&name.to_string_lossy());
        debug!("Found frame {index}: {path:?}");
        frames.push(FrameRef { path, index });
    }

    frames.sort_by(|a, b| {
        a.index
            .cmp(&b.index)
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    Ok(frames)
}
