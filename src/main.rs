use anyhow::Result;
use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;
use types::generate_args::GenerateArgs;

mod discover;
mod emit;
mod paths;
mod types;

const USAGE_EXAMPLE: &str = "Example: bmp2frames include/nooo src/animations/nooo.rs";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn parse_args() -> GenerateArgs {
    match GenerateArgs::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            eprintln!("\n{USAGE_EXAMPLE}");
            exit(2);
        }
        // --help and --version
        Err(err) => err.exit(),
    }
}

fn run(args: &GenerateArgs) -> Result<()> {
    let frames = discover::discover_frames(&args.target_dir)?;

    if frames.is_empty() {
        println!("No BMP files found in '{}'", args.target_dir.display());
        return Ok(());
    }

    let written = emit::write_module(&frames, &args.target_dir, &args.output_file)?;
    println!(
        "Generated {} with {written} frames",
        args.output_file.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args();
    init_tracing();
    run(&args)
}
