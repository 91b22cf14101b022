use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Embeds a directory of numbered BMP frames into a generated Rust module",
    long_about = None
)]
pub struct GenerateArgs {
    /// Directory containing frame-<n>.bmp files
    pub target_dir: PathBuf,

    /// Path of the Rust module to write (parent directories are created)
    pub output_file: PathBuf,
}
