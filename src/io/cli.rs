//! Command-line interface for batch stereogram generation from depth map files

use crate::algorithm::invocation::{StereogramRequest, invoke};
use crate::algorithm::noise::RandomNoise;
use crate::algorithm::parameters::{NoiseMode, SynthesisParams};
use crate::io::configuration::{
    DEFAULT_DEPTH_STEPS, DEFAULT_SEPARATION_DEPTH, DEFAULT_TILE_WIDTH, INPUT_EXTENSIONS,
    OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, StereogramError, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::store::{FileSink, FileSystemSource};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "stereotile")]
#[command(author, version, about = "Generate autostereograms from depth maps")]
/// Command-line arguments for the stereogram tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Depth map image or directory of depth maps
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Pattern image repeated across the background (random dots if omitted)
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,

    /// Tile width in pixels
    #[arg(short, long, conflicts_with_all = ["divisions", "separation"])]
    pub tile_width: Option<u32>,

    /// Number of pattern repeats across the image; lower gives more depth but is harder to see
    #[arg(short, long, conflicts_with = "separation")]
    pub divisions: Option<u32>,

    /// Eye separation in pixels (legacy form of --tile-width)
    #[arg(long)]
    pub separation: Option<u32>,

    /// Displacement in pixels at maximum depth; should stay below the tile width
    #[arg(short = 'D', long)]
    pub depth_steps: Option<u32>,

    /// Invert the depth map (switches between cross-eyed and wall-eyed viewing)
    #[arg(short, long)]
    pub invert: bool,

    /// Write single-channel grayscale output
    #[arg(short, long)]
    pub grayscale: bool,

    /// Generate gray random dots instead of colored ones
    #[arg(short, long)]
    pub monochrome_noise: bool,

    /// Propagate rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Random seed for reproducible dots (fresh randomness if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output path (single file targets only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Synthesis parameters selected by the flags
    ///
    /// `--divisions` and `--separation` pick their forms; otherwise the
    /// explicit tile width form is used. `--depth-steps` overrides the
    /// displacement of any form.
    pub fn synthesis_params(&self) -> SynthesisParams {
        let base = if let Some(divisions) = self.divisions {
            SynthesisParams::divisions(divisions)
        } else if let Some(separation) = self.separation {
            SynthesisParams::separation(separation, DEFAULT_SEPARATION_DEPTH)
        } else {
            SynthesisParams::advanced(
                self.tile_width.unwrap_or(DEFAULT_TILE_WIDTH),
                DEFAULT_DEPTH_STEPS,
            )
        };

        let base = match self.depth_steps {
            Some(depth_steps) => base.with_depth_steps(depth_steps),
            None => base,
        };

        base.with_invert_depth(self.invert)
            .with_grayscale_output(self.grayscale)
            .with_noise_mode(if self.monochrome_noise {
                NoiseMode::Monochrome
            } else {
                NoiseMode::Color
            })
            .with_parallel(!self.sequential)
    }

    /// Noise for the file at `index` in the batch
    ///
    /// A fixed seed is offset by the index so every file gets its own dots.
    pub fn noise_for(&self, index: usize) -> RandomNoise<StdRng> {
        self.seed.map_or_else(RandomNoise::from_os_rng, |seed| {
            RandomNoise::seeded(seed.wrapping_add(index as u64))
        })
    }
}

/// Orchestrates batch processing of depth map files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Depth maps selected by the target, sorted, with skipped files removed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the target is neither a supported image
    /// nor a directory, or `--output` is combined with a directory target
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_depth_map_candidate(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("must be one of: {}", INPUT_EXTENSIONS.join(", ")),
                ));
            }
            Ok(self
                .should_process_file(target)
                .then(|| target.clone())
                .into_iter()
                .collect())
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"--output requires a single file target",
                ));
            }

            let entries = std::fs::read_dir(target).map_err(|e| StereogramError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && is_depth_map_candidate(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut request = StereogramRequest::new(
            input_path.to_string_lossy(),
            self.cli.synthesis_params(),
        );
        if let Some(pattern) = &self.cli.pattern {
            request = request.with_pattern(pattern.to_string_lossy());
        }

        let source = FileSystemSource::default();
        let mut sink = FileSink::new(output_path);
        let stored = invoke(&source, &mut sink, &request, self.cli.noise_for(index))?;

        info!(
            "Wrote {} ({}x{}) in {:.2}s",
            stored.image_id,
            stored.width,
            stored.height,
            start_time.elapsed().as_secs_f64()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Where the stereogram for `input_path` is written
    pub fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path))
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Whether a path looks like a depth map input
///
/// Accepts the supported image extensions, case-insensitively, and rejects
/// files this tool produced.
pub fn is_depth_map_candidate(path: &Path) -> bool {
    let supported = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(ext))
        });
    let generated = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));

    supported && !generated
}
