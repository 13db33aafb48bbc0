//! Tests for command-line parsing and batch frame processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{GrayImage, Luma};
    use penrose_frames::RenderError;
    use penrose_frames::io::cli::{Cli, FrameProcessor};
    use penrose_frames::io::configuration::{DEFAULT_FRAME_PREFIX, DEFAULT_INDEX_DIGITS};
    use penrose_frames::sampling::luminance::BoundsPolicy;
    use penrose_frames::tiling::pairing::RhombusMode;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_source(dir: &Path, index: usize, value: u8) {
        let path = dir.join(format!("a_{index:06}.png"));
        GrayImage::from_pixel(32, 32, Luma([value]))
            .save(path)
            .unwrap();
    }

    fn create_test_cli(source: &Path, output: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "program".to_string(),
            source.display().to_string(),
            output.display().to_string(),
            "--quiet".to_string(),
            "--depth".to_string(),
            "1".to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the required directories
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "frames", "out"]);

        assert_eq!(cli.source_dir, PathBuf::from("frames"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.start, 0);
        assert_eq!(cli.end_index(), 0);
        assert_eq!(cli.depth, None);
        assert_eq!(cli.prefix, DEFAULT_FRAME_PREFIX);
        assert_eq!(cli.digits, DEFAULT_INDEX_DIGITS);
        assert!(!cli.svg && !cli.merge_pairs && !cli.strict_bounds && !cli.quiet);
    }

    // Tests CLI parsing with every option
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "frames",
            "out",
            "--start",
            "10",
            "--end",
            "20",
            "--depth",
            "5",
            "--prefix",
            "frame-",
            "--digits",
            "4",
            "--svg",
            "--merge-pairs",
            "--strict-bounds",
            "--jobs",
            "2",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!((cli.start, cli.end_index()), (10, 20));
        assert_eq!(cli.depth, Some(5));
        assert_eq!(cli.prefix, "frame-");
        assert_eq!(cli.digits, 4);
        assert_eq!(cli.jobs, Some(2));
        assert!(cli.svg && cli.merge_pairs && cli.strict_bounds);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing (-s, -e, -d, -m, -j)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "frames", "out", "-s", "3", "-e", "4", "-d", "2", "-m", "-j", "1", "-q",
            "-n",
        ]);

        assert_eq!((cli.start, cli.end_index()), (3, 4));
        assert_eq!(cli.depth, Some(2));
        assert!(cli.merge_pairs && cli.quiet && cli.no_skip);
        assert_eq!(cli.jobs, Some(1));
    }

    // Tests flags map onto the render configuration
    // Verified by ignoring the merge flag
    #[test]
    fn test_render_config() {
        let cli = Cli::parse_from([
            "program",
            "frames",
            "out",
            "-d",
            "3",
            "--merge-pairs",
            "--strict-bounds",
            "--svg",
        ]);
        let config = cli.render_config().unwrap();

        assert_eq!(config.depth_override, Some(3));
        assert_eq!(config.rhombus_mode, RhombusMode::MergePairs);
        assert_eq!(config.bounds_policy, BoundsPolicy::Strict);
        assert!(config.emit_vector);

        let defaults = Cli::parse_from(["program", "frames", "out"])
            .render_config()
            .unwrap();
        assert_eq!(defaults.rhombus_mode, RhombusMode::PerTriangle);
        assert_eq!(defaults.bounds_policy, BoundsPolicy::Clamp);
    }

    // Tests negative and oversized depths are rejected
    // Verified by casting the depth without checks
    #[test]
    fn test_render_config_rejects_bad_depth() {
        let negative = Cli::parse_from(["program", "frames", "out", "--depth", "-1"]);
        assert!(negative.render_config().is_err());

        let huge = Cli::parse_from(["program", "frames", "out", "--depth", "40"]);
        assert!(huge.render_config().is_err());
    }

    // Tests error handling for a missing source directory
    // Verified by removing the directory check
    #[test]
    fn test_process_missing_source_dir() {
        let temp_dir = TempDir::new().unwrap();
        let cli = create_test_cli(&temp_dir.path().join("missing"), temp_dir.path(), &[]);

        let result = FrameProcessor::new(cli).process();
        assert!(matches!(result, Err(RenderError::InvalidParameter { .. })));
    }

    // Tests a reversed range is rejected
    // Verified by silently swapping start and end
    #[test]
    fn test_collect_frames_reversed_range() {
        let temp_dir = TempDir::new().unwrap();
        let cli = create_test_cli(temp_dir.path(), temp_dir.path(), &["-s", "5", "-e", "2"]);

        assert!(FrameProcessor::new(cli).collect_frames().is_err());
    }

    // Tests skip logic when output frames exist
    // Verified by removing skip check
    #[test]
    fn test_collect_frames_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("a_000001.png"), "done").unwrap();

        let cli = create_test_cli(temp_dir.path(), &output, &["-e", "2"]);
        assert_eq!(FrameProcessor::new(cli).collect_frames().unwrap(), [0, 2]);

        let cli = create_test_cli(temp_dir.path(), &output, &["-e", "2", "--no-skip"]);
        assert_eq!(FrameProcessor::new(cli).collect_frames().unwrap(), [0, 1, 2]);
    }

    // Tests a range of frames renders into the output directory
    // Verified by writing outputs under the source names
    #[test]
    fn test_process_renders_frames() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("frames");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(&source).unwrap();
        write_source(&source, 0, 255);
        write_source(&source, 1, 0);

        let cli = create_test_cli(&source, &output, &["-e", "1", "--svg", "-j", "2"]);
        FrameProcessor::new(cli).process().unwrap();

        for name in ["a_000000.png", "a_000001.png", "a_000000.svg", "a_000001.svg"] {
            assert!(output.join(name).exists(), "{name} should exist");
        }
        let rendered = image::open(output.join("a_000000.png")).unwrap();
        assert_eq!((rendered.width(), rendered.height()), (800, 800));
    }

    // Tests a failing frame does not stop the others
    // Verified by aborting the batch on the first error
    #[test]
    fn test_process_isolates_failures() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("frames");
        let output = temp_dir.path().join("out");
        fs::create_dir_all(&source).unwrap();
        write_source(&source, 0, 200);
        write_source(&source, 2, 200);

        let cli = create_test_cli(&source, &output, &["-e", "2"]);
        let result = FrameProcessor::new(cli).process();

        match result {
            Err(RenderError::FramesFailed { failed, total }) => {
                assert_eq!(failed, [1]);
                assert_eq!(total, 3);
            }
            other => panic!("expected FramesFailed, got {other:?}"),
        }
        assert!(output.join("a_000000.png").exists());
        assert!(!output.join("a_000001.png").exists());
        assert!(output.join("a_000002.png").exists());
    }

    // Tests an already complete range does nothing
    // Verified by adding an error for empty work lists
    #[test]
    fn test_process_nothing_to_do() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a_000000.png"), "done").unwrap();

        let cli = create_test_cli(temp_dir.path(), temp_dir.path(), &[]);
        assert!(FrameProcessor::new(cli).process().is_ok());
    }
}
