use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polysub_core::{AffineCipher, Cipher, Operation, VigenereCipher};
use std::io::Read;

#[derive(Parser)]
#[command(name = "polysub")]
#[command(about = "Classical substitution cipher (de|en)crypt – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plaintext with the selected cipher
    Encrypt {
        #[command(subcommand)]
        cipher: CipherChoice,
    },

    /// Decrypt ciphertext with the selected cipher
    Decrypt {
        #[command(subcommand)]
        cipher: CipherChoice,
    },
}

#[derive(Subcommand)]
enum CipherChoice {
    /// Affine cipher, c = (a*p + b) mod 26
    Affine {
        /// Multiplicative key, must be coprime to 26
        #[arg(short = 'a', long)]
        key_a: i32,

        /// Additive key
        #[arg(short = 'b', long)]
        key_b: i32,

        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },

    /// Vigenère cipher with a repeating key word
    Vigenere {
        /// Alphabetic key word
        #[arg(short, long)]
        key: String,

        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (operation, choice) = match cli.command {
        Commands::Encrypt { cipher } => (Operation::Encrypt, cipher),
        Commands::Decrypt { cipher } => (Operation::Decrypt, cipher),
    };

    let (cipher, text) = build_cipher(choice)?;
    let text = read_text(text)?;

    println!("{}", cipher.process(&text, operation));

    Ok(())
}

/// Construct the selected cipher and hand back the optional inline text
fn build_cipher(choice: CipherChoice) -> Result<(Box<dyn Cipher>, Option<String>)> {
    match choice {
        CipherChoice::Affine { key_a, key_b, text } => {
            let cipher = AffineCipher::new(key_a, key_b)
                .with_context(|| format!("Invalid affine key pair ({key_a}, {key_b})"))?;
            Ok((Box::new(cipher), text))
        }
        CipherChoice::Vigenere { key, text } => {
            let cipher = VigenereCipher::new(&key)
                .with_context(|| format!("Invalid vigenere key {key:?}"))?;
            Ok((Box::new(cipher), text))
        }
    }
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
