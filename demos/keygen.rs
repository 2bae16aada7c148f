use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use coldkey::{entropy, EntropySource, KeyPair, SecureMnemonic};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Input {
    Dice,
    Coinflip,
    Hex,
    Wif,
}

impl Input {
    fn source(self) -> Option<EntropySource> {
        match self {
            Input::Dice => Some(EntropySource::Dice),
            Input::Coinflip => Some(EntropySource::Coinflip),
            Input::Hex => Some(EntropySource::Hex),
            Input::Wif => None,
        }
    }
}

/// Build a key from dice rolls, coin flips, hex or an existing WIF.
#[derive(Debug, Parser)]
struct Args {
    /// Kind of input to read
    #[arg(value_enum)]
    input: Input,

    /// The sequence itself; read from stdin when omitted
    sequence: Option<String>,

    /// Use the 65-byte public key encoding (ignored for WIF input)
    #[arg(long)]
    uncompressed: bool,

    /// Also print the 24-word phrase for the key
    #[arg(long)]
    mnemonic: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let sequence = match args.sequence {
        Some(sequence) => sequence,
        None => prompt_sequence(args.input)?,
    };
    let sequence = sequence.trim();
    let compressed = !args.uncompressed;

    let pair = match args.input.source() {
        Some(source) => KeyPair::new(entropy::decode_sequence(source, sequence)?, compressed),
        None => KeyPair::from_wif(sequence)?,
    };
    info!(compressed = pair.is_compressed(), "key accepted");

    let report = pair.report()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if args.mnemonic {
        let mnemonic = SecureMnemonic::from_private_key(pair.private_key())?;
        println!("\nMnemonic: {}", mnemonic.phrase());
    }

    Ok(())
}

fn prompt_sequence(input: Input) -> Result<String, Box<dyn std::error::Error>> {
    let hint = match input {
        Input::Dice => "99 dice rolls (1-6)",
        Input::Coinflip => "256 coin flips (0/1)",
        Input::Hex => "64 hex characters",
        Input::Wif => "a WIF private key",
    };
    print!("Enter {}: ", hint);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
