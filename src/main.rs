use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use textcloak::cli::{
    decrypt_file, encrypt_file, generate_key_file, show_info, validate_file, DecryptOptions,
    EncryptOptions, GenerateOptions,
};
use textcloak::{CloakError, Result};
use tracing::debug;

/// Version info from build.rs
const VERSION: &str = env!("TEXTCLOAK_VERSION");
const PROFILE: &str = env!("TEXTCLOAK_PROFILE");
const GIT_HASH: &str = env!("TEXTCLOAK_GIT_HASH");

#[derive(Parser)]
#[command(name = "textcloak")]
#[command(about = "A simple CLI tool for encryption and decryption of text files", long_about = None)]
#[command(after_help = "Example usage:
  textcloak encrypt -i file.txt -k key.json
  textcloak decrypt -i file.txt -k key.json
  textcloak generate-key -o key.json")]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text file with a key file
    #[command(alias = "e")]
    Encrypt {
        /// Path to the input file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to the key file
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Path to the output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a text file with the key file used to encrypt it
    #[command(alias = "d")]
    Decrypt {
        /// Path to the input file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to the key file
        #[arg(short, long)]
        key: Option<PathBuf>,

        /// Path to the output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a key file interactively
    #[command(name = "generate-key", alias = "g")]
    GenerateKey {
        /// Path to the key file to create
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generate this many random steps instead of prompting
        #[arg(long, value_name = "STEPS")]
        random: Option<usize>,
    },

    /// Show the steps stored in a key file
    #[command(alias = "i")]
    Info {
        /// Path to the key file
        #[arg(short, long)]
        key: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries ciphertext, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn print_text(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encrypt { input, key, output } => {
            let input = validate_file(input.as_deref(), "input")?;
            let key = validate_file(key.as_deref(), "key")?;
            let options = EncryptOptions { output };

            let ciphertext = encrypt_file(input, key, &options)?;
            if options.output.is_none() {
                print_text(&ciphertext)?;
            }
            Ok(())
        }

        Commands::Decrypt { input, key, output } => {
            let input = validate_file(input.as_deref(), "input")?;
            let key = validate_file(key.as_deref(), "key")?;
            let options = DecryptOptions { output };

            let plaintext = decrypt_file(input, key, &options)?;
            if options.output.is_none() {
                print_text(&plaintext)?;
            }
            Ok(())
        }

        Commands::GenerateKey { output, random } => {
            let output =
                output.ok_or_else(|| CloakError::Usage("output file not provided".into()))?;
            let options = GenerateOptions { random };

            generate_key_file(&output, &options, io::stdin().lock(), io::stdout())?;
            Ok(())
        }

        Commands::Info { key } => {
            let key = validate_file(key.as_deref(), "key")?;
            print!("{}", show_info(key)?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("textcloak {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);
    debug!(verbose = cli.verbose, "textcloak started");

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_ok() {
                println!();
            }
            return ExitCode::SUCCESS;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CloakError::Usage(_)) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
