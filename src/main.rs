use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use wart::{config, InputKind, Options};

#[derive(Parser, Debug)]
#[command(name = "wart")]
#[command(about = "Convert an 8-bit unsigned mono WAV file to a PWM header for UART playback")]
struct Args {
    /// Input file (8-bit unsigned, mono)
    #[arg(short, long, default_value = config::DEFAULT_INFILE)]
    infile: PathBuf,

    /// Output header file [default: input path with a .h extension]
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Name of the generated C array
    #[arg(short, long, default_value = config::DEFAULT_NAME)]
    name: String,

    /// Treat the input as headerless 8-bit unsigned PCM
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = Options {
        infile: args.infile,
        outfile: args.outfile,
        name: args.name,
        input: if args.raw { InputKind::Raw } else { InputKind::Wav },
    };

    let stats = wart::convert_file(&options)
        .with_context(|| format!("Failed to convert {}", options.infile.display()))?;

    println!(
        "Wrote {} samples to {}",
        stats.samples,
        options.output_path().display()
    );
    Ok(())
}
