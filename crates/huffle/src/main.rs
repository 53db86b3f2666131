//! Huffle command-line tool.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a file into a packed artifact
//! huffle -e -i notes.txt -o notes.huf
//!
//! # Decode it back
//! huffle -d -i notes.huf -o notes.out
//!
//! # ASCII opcodes, printing the body to stdout
//! huffle -e -a -p -i notes.txt -o notes.huf
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use huffle::decode::render_body;
use huffle::HuffmanCodec;
use huffle_core::{CompressionRatio, Compressor, Decompressor, Error, OpcodeMode};

#[derive(Parser, Debug)]
#[command(name = "huffle")]
#[command(version)]
#[command(about = "Static Huffman codec for byte streams", long_about = None)]
#[command(group(ArgGroup::new("operation").required(true).args(["encode", "decode"])))]
struct Args {
    /// Encode the input file
    #[arg(short = 'e')]
    encode: bool,

    /// Decode the input file
    #[arg(short = 'd')]
    decode: bool,

    /// Use ASCII '0'/'1' opcodes instead of packed bits
    #[arg(short = 'a')]
    ascii: bool,

    /// Print the opcode body to stdout
    #[arg(short = 'p')]
    print: bool,

    /// Input file
    #[arg(short = 'i', value_name = "FILE")]
    input: PathBuf,

    /// Output file (created or truncated)
    #[arg(short = 'o', value_name = "FILE")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("huffle: {err}");
            exit_code_for(&err)
        }
    }
}

fn run(args: &Args) -> huffle_core::Result<()> {
    let mode = if args.ascii {
        OpcodeMode::Ascii
    } else {
        OpcodeMode::Packed
    };
    let codec = HuffmanCodec::with_mode(mode);

    let input = fs::read(&args.input)?;

    let output = if args.encode {
        let artifact = codec.compress(&input)?;
        let ratio = CompressionRatio::new(input.len(), artifact.len());
        info!(
            mode = mode.name(),
            original = input.len(),
            encoded = artifact.len(),
            savings_percent = ratio.savings_percent(),
            "encode complete"
        );
        if args.print {
            println!("{}", render_body(&artifact, mode)?);
        }
        artifact
    } else {
        if args.print {
            println!("{}", render_body(&input, mode)?);
        }
        let decoded = codec.decompress(&input)?;
        info!(
            mode = mode.name(),
            encoded = input.len(),
            decoded = decoded.len(),
            "decode complete"
        );
        decoded
    };

    fs::write(&args.output, output)?;
    Ok(())
}

/// Surface the OS errno where the failure came from the filesystem;
/// everything else exits with 1.
fn exit_code_for(err: &Error) -> ExitCode {
    match err {
        Error::Io(io) => match io.raw_os_error() {
            Some(code) if (1..=255).contains(&code) => ExitCode::from(code as u8),
            _ => ExitCode::FAILURE,
        },
        _ => ExitCode::FAILURE,
    }
}
