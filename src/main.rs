//! CLI entry point for rendering Penrose-stylized frame sequences

use clap::Parser;
use penrose_frames::io::cli::{Cli, FrameProcessor};

fn main() -> penrose_frames::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut processor = FrameProcessor::new(cli);
    processor.process()
}
