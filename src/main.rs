use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use voxlot::{Config, DetectRequest, DetectService};

#[derive(Parser, Debug)]
#[command(name = "voxlot")]
#[command(author, version, about = "Detect AI-generated voices over a minimal HTTP API")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP detection service
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8000")]
        port: u16,

        /// Comma-separated API key allow-list
        #[arg(long, env = "API_KEYS", default_value = "test-key-123", hide_env_values = true)]
        api_keys: String,

        /// Team/service identity reported in responses
        #[arg(long, env = "TEAM_NAME", default_value = "voxlot")]
        team: String,
    },

    /// Classify one base64 payload and print the response JSON
    Classify {
        /// File containing the base64 audio (stdin when omitted)
        file: Option<PathBuf>,

        /// Language hint (e.g. "ta", "hi")
        #[arg(short, long)]
        language_hint: Option<String>,

        /// Team/service identity reported in responses
        #[arg(long, env = "TEAM_NAME", default_value = "voxlot")]
        team: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Command::Serve { port, api_keys, team } => {
            let service = DetectService::new(Config::new(&api_keys, &team));
            if service.key_count() == 0 {
                log::warn!("API_KEYS is empty; every /api/detect request will be rejected");
            }
            if let Err(e) = voxlot::serve::start(port, service) {
                eprintln!("Server error: {}", e);
                std::process::exit(1);
            }
        }

        Command::Classify { file, language_hint, team } => {
            let audio_base64 = match read_payload(file.as_deref()) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read payload: {}", e);
                    std::process::exit(1);
                }
            };

            // No auth gate for local runs; same pipeline otherwise
            let service = DetectService::new(Config::new("", &team));
            let request = DetectRequest {
                audio_base64,
                language_hint,
            };

            match service.classify_payload(&request) {
                Ok(response) => match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize response: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Classification failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Read the base64 payload from a file, or stdin when no file is given.
/// Surrounding whitespace (trailing newline, usually) is trimmed.
fn read_payload(file: Option<&std::path::Path>) -> std::io::Result<String> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}
