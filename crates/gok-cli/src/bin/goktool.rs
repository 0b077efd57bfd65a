use std::path::Path;

use clap::{Parser, Subcommand};

use gok_cli::commands::{alphabet_ops, config_ops, translit_ops};

#[derive(Parser)]
#[command(name = "goktool", about = "Turkish to Old Turkic transliteration tools")]
struct Cli {
    /// Write JSONL trace spans into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text (reads stdin when TEXT is omitted)
    Translit {
        /// Turkish text
        text: Option<String>,
        /// Word separator override
        #[arg(long)]
        separator: Option<String>,
        /// Leave digits unexpanded (they are then dropped)
        #[arg(long)]
        no_numbers: bool,
        /// Settings TOML to use instead of the defaults
        #[arg(long)]
        settings: Option<String>,
    },

    /// Split words into syllables
    Syllabify {
        /// Words to split
        #[arg(required = true)]
        words: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Spell out the numbers in a text
    Numbers {
        /// Text containing digit runs
        text: String,
    },

    /// Spell out a single integer
    Words {
        /// Value to spell out
        n: u64,
    },

    /// Show each stage of transliterating one word
    Explain {
        /// Word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the letter and ligature tables
    Alphabet,

    /// Print the default settings TOML
    SettingsExport,

    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // held until main returns so queued spans are flushed
    let _trace = cli
        .trace_dir
        .as_deref()
        .map(|dir| gok_engine::init_tracing(Path::new(dir)));

    match cli.command {
        Command::Translit {
            text,
            separator,
            no_numbers,
            settings,
        } => translit_ops::translit_cmd(
            text.as_deref(),
            separator.as_deref(),
            no_numbers,
            settings.as_deref(),
        ),
        Command::Syllabify { words, json } => translit_ops::syllabify_cmd(&words, json),
        Command::Numbers { text } => translit_ops::numbers_cmd(&text),
        Command::Words { n } => translit_ops::words_cmd(n),
        Command::Explain { word, json } => translit_ops::explain_cmd(&word, json),
        Command::Alphabet => alphabet_ops::alphabet_cmd(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
