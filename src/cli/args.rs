//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--db <path>`: Database file (overrides the config file)
//! - `--config <path>`: Config file to use instead of the default locations
//! - `--lenient`: Degrade query failures to empty results
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::types::{Lang, LinkType, Pos, SynsetId};

/// wnj - Query the Japanese WordNet database
#[derive(Parser, Debug)]
#[command(name = "wnj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the lexicon database (wnjpn.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log query failures and return empty results instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up words by lemma
    #[command(
        name = "words",
        long_about = "Look up words by lemma.\n\n\
            The lemma is lowercased before matching. Every matching word is listed \
            with its id, language, part of speech, and pronunciation.",
        after_help = "\
EXAMPLES:
    # Every word spelled 'path'
    wnj words path

    # Only nouns
    wnj words path --pos n

    # Japanese lemmas work the same way
    wnj words 道"
    )]
    Words {
        /// Lemma to look up
        lemma: String,

        /// Part of speech (a, r, n, v)
        #[arg(long)]
        pos: Option<Pos>,
    },

    /// Find synsets by canonical name
    #[command(
        name = "synsets",
        after_help = "\
EXAMPLES:
    wnj synsets path --pos n
    wnj synsets path --pos n --define"
    )]
    Synsets {
        /// Synset name
        name: String,

        /// Part of speech (a, r, n, v)
        #[arg(long)]
        pos: Pos,

        /// Also print each synset's definition
        #[arg(long)]
        define: bool,
    },

    /// List the words attached to a synset
    #[command(
        name = "senses",
        after_help = "\
EXAMPLES:
    wnj senses 00001740-n
    wnj senses 00001740-n --lang jpn"
    )]
    Senses {
        /// Synset id, e.g. 00001740-n
        synset: SynsetId,

        /// Only senses in this language (eng, jpn)
        #[arg(long)]
        lang: Option<Lang>,
    },

    /// List the links leaving a synset
    #[command(
        name = "links",
        after_help = "\
EXAMPLES:
    # Every outgoing link
    wnj links 00001740-n

    # Only hyponyms
    wnj links 00001740-n --link hypo"
    )]
    Links {
        /// Synset id, e.g. 00001740-n
        synset: SynsetId,

        /// Only links of this type (e.g. hype, hypo, mero)
        #[arg(long)]
        link: Option<LinkType>,
    },

    /// Follow one link type from every synset with a given name
    #[command(
        name = "related",
        long_about = "Follow one link type from every synset with a given name.\n\n\
            Finds the synsets named NAME with part of speech POS, follows every link \
            of type LINK from each, and prints the synsets reached. Targets missing \
            from the SYNSET table are printed by id only.",
        after_help = "\
EXAMPLES:
    # Hyponyms of the noun 'path'
    wnj related path --pos n --link hypo

    # Hypernyms, as JSON
    wnj related path --pos n --link hype --json"
    )]
    Related {
        /// Synset name
        name: String,

        /// Part of speech (a, r, n, v)
        #[arg(long)]
        pos: Pos,

        /// Link type to follow
        #[arg(long)]
        link: LinkType,
    },

    /// Print the definition of a synset
    #[command(name = "define")]
    Define {
        /// Synset id, e.g. 00001740-n
        synset: SynsetId,
    },

    /// Show part-of-speech and link-type descriptions stored in the database
    #[command(name = "vocab")]
    Vocab {
        /// Description language (eng, jpn)
        #[arg(long, default_value = "eng")]
        lang: Lang,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "View or modify wnj configuration.\n\n\
            Configuration is read from --config, $WNJ_CONFIG, \
            $XDG_CONFIG_HOME/wnj/config.toml, or ~/.wnj/config.toml, in that order. \
            Writes go to the file that was loaded, or ~/.wnj/config.toml.",
        after_help = "\
EXAMPLES:
    # Remember the database location
    wnj config set database ~/data/wnjpn.db

    # Get a specific value
    wnj config get policy

    # List all values and where they came from
    wnj config list"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for wnj commands.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    wnj completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    wnj completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
    /// Print the config file path
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
