//! Audioscribe CLI - serve the transcription API or transcribe files directly
//!
//! # Main Commands
//!
//! ```bash
//! audioscribe serve                    # Start HTTP server (port 3000)
//! audioscribe transcribe speech.mp3    # Transcribe a local audio file
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use audioscribe::{validate_upload, TranscriberClient};

#[derive(Parser)]
#[command(name = "audioscribe")]
#[command(about = "Transcribe audio files with the Whisper API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Directory with the built frontend, served at /
        #[arg(long, default_value = "frontend/dist")]
        static_dir: PathBuf,

        /// Serve the API only, without static files
        #[arg(long)]
        no_static: bool,
    },

    /// Transcribe a local audio file
    Transcribe {
        /// Input audio file (wav, mp3, m4a, flac, ogg, aac)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Whisper model to use
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            static_dir,
            no_static,
        } => {
            let static_dir = if no_static { None } else { Some(static_dir) };
            audioscribe::server::start_server(port, static_dir).await
        }

        Commands::Transcribe {
            input,
            output,
            model,
        } => cmd_transcribe(&input, output.as_deref(), model.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_transcribe(
    input: &Path,
    output: Option<&Path>,
    model: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("🎙️  Transcribing: {}", input.display());

    let name = input.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let size = fs::metadata(input)?.len();
    validate_upload(name, size)?;

    let mut client = TranscriberClient::from_env()?;
    if let Some(model) = model {
        client = client.with_model(model);
    }
    eprintln!("   Model: {}", client.model());

    let transcription = client.transcribe_file(input).await?;
    eprintln!("✅ Transcription completed ({} chars)", transcription.chars().count());

    write_output(&transcription, output)?;
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
