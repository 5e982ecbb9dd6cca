//! jpegdump CLI - marker-level trace of JPEG and JPEG-LS files.
//!
//! Prints one offset-annotated line per marker segment found in the input,
//! with field-level detail for the JPEG-LS frame and scan headers.

use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Dump the marker structure of JPEG and JPEG-LS codestreams
#[derive(Parser)]
#[command(name = "jpegdump")]
#[command(author = "jpegdump-rs contributors")]
#[command(version)]
#[command(about = "Dump the marker structure of JPEG and JPEG-LS codestreams", long_about = None)]
#[command(after_help = "EXAMPLES:
    jpegdump image.jls
    RUST_LOG=debug jpegdump scan.jpg

For more information, visit: https://github.com/rad-medica/jpegdump-rs")]
struct Cli {
    /// Path to the JPEG or JPEG-LS file to dump
    path: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = dump_file(&cli.path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dump_file(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    println!("Dumping JPEG file: {}", path.display());
    println!("=============================================================================");

    let file = File::open(path)?;
    let mut sink = jpegdump_rs::StdoutSink;
    jpegdump_rs::dump(BufReader::new(file), &mut sink)?;
    Ok(())
}
