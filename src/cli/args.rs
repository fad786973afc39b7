//! Command line argument parsing for the typomatch CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::Algorithm;

/// typomatch - score how similar short strings are
#[derive(Parser, Debug, Clone)]
#[command(name = "typomatch")]
#[command(about = "String-similarity toolkit for typo detection and fuzzy matching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TypoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TYPOMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TypoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score two strings with one or all algorithms
    Score(ScoreArgs),

    /// Decide whether an input is a typo of a target
    Check(CheckArgs),

    /// Rank candidates from a file against an input
    Suggest(SuggestArgs),
}

/// Options shared by every scoring command
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringOptions {
    /// Gram width for cosine and TF-IDF similarity
    #[arg(short = 'n', long)]
    pub gram_width: Option<usize>,

    /// Newline-separated reference corpus enabling TF-IDF scoring
    #[arg(long, value_name = "CORPUS_FILE")]
    pub corpus: Option<PathBuf>,
}

/// Arguments for scoring a pair
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// First string
    #[arg(value_name = "A")]
    pub a: String,

    /// Second string
    #[arg(value_name = "B")]
    pub b: String,

    /// Algorithm to run
    #[arg(short, long, default_value = "all")]
    pub algorithm: AlgorithmChoice,

    #[command(flatten)]
    pub scoring: ScoringOptions,
}

/// Arguments for checking a pair
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Possibly misspelled input
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Intended target
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Algorithm to run (defaults to the configured one)
    #[arg(short, long)]
    pub algorithm: Option<AlgorithmArg>,

    /// Minimum normalized score to count as a typo
    #[arg(short, long)]
    pub threshold: Option<f64>,

    #[command(flatten)]
    pub scoring: ScoringOptions,
}

/// Arguments for ranking candidates
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Possibly misspelled input
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Newline-separated candidate file
    #[arg(long, value_name = "CANDIDATES_FILE")]
    pub candidates: PathBuf,

    /// Algorithm to run (defaults to the configured one)
    #[arg(short, long)]
    pub algorithm: Option<AlgorithmArg>,

    /// Minimum normalized score for a candidate to be listed
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Maximum number of candidates to list
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub scoring: ScoringOptions,
}

/// Algorithms selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Levenshtein edit distance
    Levenshtein,
    /// Damerau-Levenshtein distance
    Damerau,
    /// Jaro similarity
    Jaro,
    /// Jaro-Winkler similarity
    JaroWinkler,
    /// N-gram cosine similarity
    Cosine,
    /// Corpus-weighted TF-IDF similarity
    TfIdf,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Levenshtein => Algorithm::Levenshtein,
            AlgorithmArg::Damerau => Algorithm::DamerauLevenshtein,
            AlgorithmArg::Jaro => Algorithm::Jaro,
            AlgorithmArg::JaroWinkler => Algorithm::JaroWinkler,
            AlgorithmArg::Cosine => Algorithm::Cosine,
            AlgorithmArg::TfIdf => Algorithm::TfIdf,
        }
    }
}

/// Algorithm selection for the score command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    /// Every algorithm that can run with the given options
    All,
    /// Levenshtein edit distance
    Levenshtein,
    /// Damerau-Levenshtein distance
    Damerau,
    /// Jaro similarity
    Jaro,
    /// Jaro-Winkler similarity
    JaroWinkler,
    /// N-gram cosine similarity
    Cosine,
    /// Corpus-weighted TF-IDF similarity
    TfIdf,
}

impl AlgorithmChoice {
    /// The single algorithm selected, or `None` for `all`.
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            AlgorithmChoice::All => None,
            AlgorithmChoice::Levenshtein => Some(Algorithm::Levenshtein),
            AlgorithmChoice::Damerau => Some(Algorithm::DamerauLevenshtein),
            AlgorithmChoice::Jaro => Some(Algorithm::Jaro),
            AlgorithmChoice::JaroWinkler => Some(Algorithm::JaroWinkler),
            AlgorithmChoice::Cosine => Some(Algorithm::Cosine),
            AlgorithmChoice::TfIdf => Some(Algorithm::TfIdf),
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_score_command() {
        let args = TypoArgs::try_parse_from([
            "typomatch",
            "score",
            "kitten",
            "sitting",
            "--algorithm",
            "damerau",
        ])
        .unwrap();

        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.a, "kitten");
            assert_eq!(score_args.b, "sitting");
            assert_eq!(
                score_args.algorithm.algorithm(),
                Some(Algorithm::DamerauLevenshtein)
            );
            assert_eq!(score_args.scoring.gram_width, None);
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_score_defaults_to_all() {
        let args = TypoArgs::try_parse_from(["typomatch", "score", "a", "b"]).unwrap();

        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.algorithm, AlgorithmChoice::All);
            assert_eq!(score_args.algorithm.algorithm(), None);
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_check_command() {
        let args = TypoArgs::try_parse_from([
            "typomatch",
            "check",
            "usernmae",
            "username",
            "--threshold",
            "0.9",
            "--algorithm",
            "tf-idf",
            "--corpus",
            "corpus.txt",
            "-n",
            "3",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.input, "usernmae");
            assert_eq!(check_args.threshold, Some(0.9));
            assert_eq!(check_args.algorithm, Some(AlgorithmArg::TfIdf));
            assert_eq!(check_args.scoring.corpus, Some(PathBuf::from("corpus.txt")));
            assert_eq!(check_args.scoring.gram_width, Some(3));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_suggest_command() {
        let args = TypoArgs::try_parse_from([
            "typomatch",
            "suggest",
            "serach",
            "--candidates",
            "words.txt",
            "--limit",
            "3",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.candidates, PathBuf::from("words.txt"));
            assert_eq!(suggest_args.limit, Some(3));
            assert_eq!(suggest_args.algorithm, None);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TypoArgs::try_parse_from(["typomatch", "score", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = TypoArgs::try_parse_from(["typomatch", "-vv", "score", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = TypoArgs::try_parse_from(["typomatch", "--quiet", "score", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TypoArgs::try_parse_from(["typomatch", "--format", "json", "score", "a", "b"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_algorithm_arg_conversion() {
        assert_eq!(Algorithm::from(AlgorithmArg::Damerau), Algorithm::DamerauLevenshtein);
        assert_eq!(Algorithm::from(AlgorithmArg::JaroWinkler), Algorithm::JaroWinkler);
    }
}
