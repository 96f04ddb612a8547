//! Command-line front end for hiding and recovering messages in WAV files.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use sotto::channel::{Decoder, Encoder};
use sotto::{wave, Embed, Extract};

#[derive(Parser)]
#[command(name = "sotto", version, about = "Hide and recover text messages in WAV audio")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print container details while processing.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Embed a message into a WAV file by appending a side channel.
    Embed {
        /// The cover file to hide the message in.
        file: PathBuf,

        /// The text to hide; at most one character per audio frame.
        #[arg(short, long)]
        text: String,

        /// Where to write the resulting file.
        #[arg(short, long, default_value = "new.wav")]
        output: PathBuf,
    },

    /// Recover the message hidden in a WAV file's trailing channel.
    Extract {
        /// The file carrying a hidden message.
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match cli.command {
        Command::Embed { file, text, output } => {
            let (cover, metadata) = wave::read(&file)?;
            info!(
                "embedding {} characters into {} frames",
                text.chars().count(),
                metadata.frame_count,
            );

            let package = Encoder::new(cover).embed(&text)?;
            wave::write(&output, &package, &metadata)?;
            println!("wrote {}", output.display());
        }
        Command::Extract { file } => {
            let (package, _) = wave::read(&file)?;

            let extracted = Decoder::new(package).extract()?;
            if !extracted.terminated {
                warn!("no terminator found; the file may not carry a message");
            }

            println!("{}", extracted.text);
        }
    }

    Ok(())
}
