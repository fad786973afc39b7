//! Command implementations for the typomatch CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::classifier::{Algorithm, ClassifierConfig, TypoClassifier};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::CorpusIndex;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TypoArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Score(score_args) => score_pair(score_args, config, &args),
        Command::Check(check_args) => check_pair(check_args, config, &args),
        Command::Suggest(suggest_args) => suggest_candidates(suggest_args, config, &args),
    }
}

/// Load the classifier configuration, falling back to defaults.
fn load_config(args: &TypoArgs) -> Result<ClassifierConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            ClassifierConfig::from_file(path)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

/// Read a newline-separated file, skipping blank lines.
///
/// Missing files and files that are not valid UTF-8 fail with an error naming
/// the path.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Apply command line overrides on top of the file configuration.
fn apply_overrides(
    mut config: ClassifierConfig,
    algorithm: Option<AlgorithmArg>,
    threshold: Option<f64>,
    scoring: &ScoringOptions,
) -> ClassifierConfig {
    if let Some(algorithm) = algorithm {
        config.algorithm = algorithm.into();
    }
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    if let Some(gram_width) = scoring.gram_width {
        config.gram_width = gram_width;
    }
    config
}

/// Build a corpus index when a corpus file was given.
fn load_corpus(scoring: &ScoringOptions, gram_width: usize) -> Result<Option<CorpusIndex>> {
    let Some(path) = &scoring.corpus else {
        return Ok(None);
    };

    info!("Loading corpus from: {}", path.display());
    let documents = read_lines(path)?;
    CorpusIndex::new(documents, gram_width).map(Some)
}

fn classifier(config: ClassifierConfig, corpus: Option<&CorpusIndex>) -> Result<TypoClassifier<'_>> {
    match corpus {
        Some(index) => TypoClassifier::with_corpus(config, index),
        None => TypoClassifier::new(config),
    }
}

/// Score a pair with one or every algorithm.
fn score_pair(args: &ScoreArgs, config: ClassifierConfig, cli_args: &TypoArgs) -> Result<()> {
    let config = apply_overrides(config, None, None, &args.scoring);
    let corpus = load_corpus(&args.scoring, config.gram_width)?;

    let algorithms: Vec<Algorithm> = match args.algorithm.algorithm() {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL
            .into_iter()
            .filter(|algorithm| {
                let runnable = !algorithm.requires_corpus() || corpus.is_some();
                if !runnable {
                    info!("Skipping {algorithm}: no corpus given");
                }
                runnable
            })
            .collect(),
    };

    let mut measurements = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let config = ClassifierConfig {
            algorithm,
            ..config.clone()
        };
        measurements.push(classifier(config, corpus.as_ref())?.measure(&args.a, &args.b)?);
    }

    output_result(
        "Scoring complete",
        &ScoreReport {
            a: args.a.clone(),
            b: args.b.clone(),
            measurements,
        },
        cli_args,
    )
}

/// Classify an input against a target.
fn check_pair(args: &CheckArgs, config: ClassifierConfig, cli_args: &TypoArgs) -> Result<()> {
    let config = apply_overrides(config, args.algorithm, args.threshold, &args.scoring);
    let corpus = load_corpus(&args.scoring, config.gram_width)?;

    let classification = classifier(config, corpus.as_ref())?.classify(&args.input, &args.target)?;

    output_result("Classification complete", &classification, cli_args)
}

/// Rank candidates from a file against an input.
fn suggest_candidates(
    args: &SuggestArgs,
    config: ClassifierConfig,
    cli_args: &TypoArgs,
) -> Result<()> {
    let mut config = apply_overrides(config, args.algorithm, args.threshold, &args.scoring);
    if let Some(limit) = args.limit {
        config.max_suggestions = limit;
    }

    let corpus = load_corpus(&args.scoring, config.gram_width)?;
    let candidates = read_lines(&args.candidates)?;
    debug!(
        "Loaded {} candidates from: {}",
        candidates.len(),
        args.candidates.display()
    );

    let start_time = Instant::now();
    let typo_classifier = classifier(config, corpus.as_ref())?;
    let suggestions = typo_classifier.rank(&args.input, &candidates)?;
    let duration = start_time.elapsed();

    output_result(
        "Ranking complete",
        &SuggestionReport {
            input: args.input.clone(),
            algorithm: typo_classifier.config().algorithm,
            threshold: typo_classifier.config().threshold,
            candidates_considered: candidates.len(),
            suggestions,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use crate::error::TypoError;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_lines_skips_blanks() {
        let file = write_file("apple\n\n  banana  \n\ncherry\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_read_lines_names_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_lines(&missing).unwrap_err();
        assert!(matches!(err, TypoError::Anyhow(_)));
        assert!(err.to_string().contains("missing.txt"));

        let mut binary = NamedTempFile::new().unwrap();
        binary.write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();
        let err = read_lines(binary.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to read "));
    }

    #[test]
    fn test_apply_overrides() {
        let scoring = ScoringOptions {
            gram_width: Some(3),
            corpus: None,
        };
        let config = apply_overrides(
            ClassifierConfig::default(),
            Some(AlgorithmArg::Cosine),
            Some(0.5),
            &scoring,
        );

        assert_eq!(config.algorithm, Algorithm::Cosine);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.gram_width, 3);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_load_corpus() {
        let file = write_file("username\npassword\n");
        let scoring = ScoringOptions {
            gram_width: None,
            corpus: Some(file.path().to_path_buf()),
        };

        let index = load_corpus(&scoring, 2).unwrap().unwrap();
        assert_eq!(index.document_count(), 2);
        assert!(load_corpus(&ScoringOptions::default(), 2).unwrap().is_none());

        let empty = write_file("\n\n");
        let scoring = ScoringOptions {
            gram_width: None,
            corpus: Some(empty.path().to_path_buf()),
        };
        assert!(load_corpus(&scoring, 2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_execute_commands() {
        let candidates = write_file("search\nstarch\nbanana\n");
        let path = candidates.path().to_str().unwrap().to_string();

        let args = TypoArgs::try_parse_from([
            "typomatch",
            "--format",
            "json",
            "suggest",
            "serach",
            "--candidates",
            path.as_str(),
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());

        let args = TypoArgs::try_parse_from(["typomatch", "-q", "score", "night", "nacht"]).unwrap();
        assert!(execute_command(args).is_ok());

        let args = TypoArgs::try_parse_from([
            "typomatch",
            "check",
            "a",
            "b",
            "--algorithm",
            "tf-idf",
        ])
        .unwrap();
        assert!(execute_command(args).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_config_file_is_used() {
        let config = write_file(r#"{"algorithm": "levenshtein", "threshold": 0.6}"#);
        let path = config.path().to_str().unwrap().to_string();

        let args = TypoArgs::try_parse_from([
            "typomatch",
            "--config",
            path.as_str(),
            "check",
            "kitten",
            "sitting",
        ])
        .unwrap();

        let loaded = load_config(&args).unwrap();
        assert_eq!(loaded.algorithm, Algorithm::Levenshtein);
        assert_eq!(loaded.gram_width, 2);
        assert!(execute_command(args).is_ok());
    }
}
