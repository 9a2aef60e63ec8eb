use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use file2c::EncodeProgress;

#[derive(Parser, Debug, Clone)]
#[command(name = "file2c")]
#[command(version, about = "Embed a binary file as a C unsigned char array")]
struct Args {
    /// Binary file to embed
    file: PathBuf,

    /// Directory the generated .c file is written to
    #[arg(default_value = ".")]
    out_dir: PathBuf,
}

/// Progress reporter using an indicatif progress bar
struct CliProgress {
    pb: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("file2c: [{bar:40.cyan/blue}] {pos}/{len} windows ({percent}%)")
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { pb }
    }
}

impl EncodeProgress for CliProgress {
    fn on_window(&mut self, index: u64, total: u64) {
        // Window count is only known once the encoder has sized the file.
        if self.pb.length() != Some(total) {
            self.pb.set_length(total);
        }
        self.pb.set_position(index + 1);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!(
        "file2c: embedding {} into {}",
        args.file.display(),
        args.out_dir.display()
    );

    let start = Instant::now();
    let mut progress = CliProgress::new();

    let out_path = file2c::convert(&args.file, &args.out_dir, &mut progress)?;
    progress.pb.finish_and_clear();

    println!(
        "file2c: wrote {} in {:.3}s",
        out_path.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
