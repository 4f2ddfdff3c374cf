use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use glox_cli::{read_source, tokens_json, Lox, RunStatus, EXIT_DATA_ERR};
use glox_scan::scan_str;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "glox")]
#[command(about = "Lox scanner front end")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a .lox file and print its tokens
    Run {
        /// Path to .lox source file
        file: String,
    },

    /// Start the interactive prompt
    Repl,

    /// Dump the token stream of a source file
    Tokens {
        /// Path to .lox source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&file),
        Some(Commands::Repl) | None => cmd_repl(),
        Some(Commands::Tokens { file, format }) => cmd_tokens(&file, format),
    }
}

fn cmd_run(file: &str) -> Result<()> {
    let mut lox = Lox::new(io::stdout().lock(), io::stderr().lock());
    let status = lox.run_file(file)?;
    drop(lox);
    if status == RunStatus::Failed {
        std::process::exit(EXIT_DATA_ERR);
    }
    Ok(())
}

fn cmd_repl() -> Result<()> {
    let mut lox = Lox::new(io::stdout().lock(), io::stderr().lock());
    lox.run_prompt(io::stdin().lock())
}

fn cmd_tokens(file: &str, format: Format) -> Result<()> {
    let src = read_source(file.as_ref())?;

    let tokens = match scan_str(&src) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_DATA_ERR);
        }
    };

    match format {
        Format::Pretty => println!("{:#?}", tokens),
        Format::Json => println!("{}", tokens_json(&tokens)?),
    }
    Ok(())
}
