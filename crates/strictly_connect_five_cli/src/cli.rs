//! Command-line interface for strictly_connect_five.

use clap::{Parser, Subcommand};
use strictly_connect_five::VariantKind;

/// Strictly Connect Five - five-in-a-row with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_connect_five")]
#[command(
    about = "Five-in-a-row on flat and stacked boards, with rewindable history",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (used only if it exists)
    #[arg(short, long, global = true, default_value = "connect_five.toml")]
    pub config: std::path::PathBuf,

    /// Board variant (flat or stacked), overriding the config file
    #[arg(long, global = true)]
    pub variant: Option<VariantKind>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply moves in order and print the final board
    Replay {
        /// Moves as comma-separated coordinates: `row,col` or `layer,row,col`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Jump to this history entry after applying the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON report instead of the text board
        #[arg(long)]
        json: bool,
    },

    /// Show the winning-line table
    Lines {
        /// Print every line's coordinates
        #[arg(long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_with_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_connect_five",
            "--variant",
            "stacked",
            "replay",
            "0,0,0",
            "1,1,1",
            "--jump",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.variant, Some(VariantKind::Stacked));
        match cli.command {
            Command::Replay { moves, jump, json } => {
                assert_eq!(moves, vec!["0,0,0", "1,1,1"]);
                assert_eq!(jump, Some(1));
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["strictly_connect_five", "play"]).unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("connect_five.toml"));
        assert_eq!(cli.variant, None);
    }

    #[test]
    fn test_variant_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["strictly_connect_five", "--variant", "FLAT", "lines"])
            .unwrap();
        assert_eq!(cli.variant, Some(VariantKind::Flat));
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let parsed = Cli::try_parse_from(["strictly_connect_five", "--variant", "cube", "play"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["strictly_connect_five", "replay"]).is_err());
    }
}
