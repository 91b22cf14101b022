use crate::{
    paths::{absolutize, relative_to, to_forward_slashes},
    types::{cleanup_guard::OutputGuard, info::FrameRef},
};
use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

const FRAMES_PER_LINE: usize = 5;

/// Everything the renderer needs: no filesystem access happens past this point
#[derive(Debug)]
pub struct AnimationModule {
    pub name: String,
    pub source: String,
    /// Include paths relative to the generated file, in playback order
    pub frame_paths: Vec<String>,
}

impl AnimationModule {
    pub fn render(&self) -> String {
        let mut code = format!("// Auto-generated animation: {}\n", self.name);
        code += &format!("// Generated from: {}\n", self.source);
        code += &format!("// Frame count: {}\n\n", self.frame_paths.len());

        for (i, path) in self.frame_paths.iter().enumerate() {
            code += &format!("const FRAME_{i}: &[u8] = include_bytes!({path:?});\n");
        }

        code += "\n// Public array of all frames - count is automatically derived\n";
        code += "pub const FRAMES: &[&[u8]] = &[\n";

        let names: Vec<String> = (0..self.frame_paths.len())
            .map(|i| format!("FRAME_{i}"))
            .collect();
        let lines: Vec<String> = names
            .chunks(FRAMES_PER_LINE)
            .map(|chunk| format!("    {}", chunk.join(", ")))
            .collect();
        if !lines.is_empty() {
            code += &lines.join(",\n");
            code += "\n";
        }

        code += "];\n\n";
        code += "// Helper function to get frame count\n";
        code += "pub const fn frame_count() -> usize {\n";
        code += "    FRAMES.len()\n";
        code += "}\n";
        code
    }
}

/// Last segment of the target directory, resolving `.`-style paths first
fn animation_name(target_dir: &Path) -> Result<String> {
    if let Some(name) = target_dir.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let absolute = absolutize(target_dir)?;
    Ok(absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}

pub fn build_module(
    frames: &[FrameRef],
    target_dir: &Path,
    output_file: &Path,
) -> Result<AnimationModule> {
    let output_dir = absolutize(output_file.parent().unwrap_or(Path::new("")))?;

    let frame_paths = frames
        .iter()
        .map(|frame| -> Result<String> {
            let absolute = absolutize(&frame.path)?;
            Ok(to_forward_slashes(&relative_to(&absolute, &output_dir)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AnimationModule {
        name: animation_name(target_dir)?,
        source: target_dir.display().to_string(),
        frame_paths,
    })
}

/// Renders `frames` into `output_file`, creating its parent directories.
/// Returns the number of frames written.
pub fn write_module(frames: &[FrameRef], target_dir: &Path, output_file: &Path) -> Result<usize> {
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {parent:?}"))?;
    }

    let module = build_module(frames, target_dir, output_file)?;
    let code = module.render();

    let mut file = File::create(output_file)
        .with_context(|| format!("Failed to create generated module: {output_file:?}"))?;
    let guard = OutputGuard::new(output_file.to_path_buf());
    file.write_all(code.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write generated module: {output_file:?}"))?;
    guard.commit();

    Ok(module.frame_paths.len())
}
