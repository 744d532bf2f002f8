use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use koe_cli::commands::{config_ops, convert_ops, install_settings};
use koe_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "koetool", about = "Phonetic markup conversion for kana speech synthesis")]
struct Cli {
    /// Custom settings TOML (replaces the built-in defaults)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Vibrato system dictionary (requires the `vibrato` feature)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,
    /// Write JSON trace lines to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to markup (reads stdin line by line when TEXT is omitted)
    Convert {
        /// Text to convert
        text: Option<String>,
    },
    /// Show the token list after every pipeline stage
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    if let Some(path) = &cli.settings {
        if let Err(e) = install_settings(path) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let dict = cli.dict.as_deref();
    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(dict, text.as_deref()),
        Command::Explain { text, json } => convert_ops::explain_cmd(dict, &text, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
