//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::{Algorithm, Classification, Measurement, Suggestion, Verdict};
use crate::cli::args::{OutputFormat, TypoArgs};
use crate::error::Result;

/// Result structure for the score command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub a: String,
    pub b: String,
    pub measurements: Vec<Measurement>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub input: String,
    pub algorithm: Algorithm,
    pub threshold: f64,
    pub candidates_considered: usize,
    pub suggestions: Vec<Suggestion>,
    pub duration_ms: u64,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self);
}

impl HumanOutput for ScoreReport {
    fn print_human(&self) {
        println!("Scores for {:?} vs {:?}:", self.a, self.b);
        println!("══════════════════════");

        for m in &self.measurements {
            if m.algorithm.is_distance() {
                println!(
                    "{:<20} distance {:>4}   score {:.4}",
                    m.algorithm.name(),
                    m.value as u64,
                    m.score
                );
            } else {
                println!("{:<20}                 score {:.4}", m.algorithm.name(), m.score);
            }
        }
    }
}

impl HumanOutput for Classification {
    fn print_human(&self) {
        let verdict = match self.verdict {
            Verdict::Exact => "exact match",
            Verdict::Typo => "typo",
            Verdict::Distinct => "distinct",
        };
        println!("{:?} vs {:?}: {verdict}", self.input, self.target);
        println!(
            "{} score {:.4} (threshold {:.2})",
            self.algorithm, self.score, self.threshold
        );
    }
}

impl HumanOutput for SuggestionReport {
    fn print_human(&self) {
        if self.suggestions.is_empty() {
            println!("No candidates for {:?}", self.input);
        } else {
            println!("Suggestions for {:?}:", self.input);
            println!("─────────────────");
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                println!(
                    "{}. {} (score: {:.4})",
                    i + 1,
                    suggestion.candidate,
                    suggestion.score
                );
            }
        }

        println!();
        println!(
            "{} candidates scored with {} in {}ms",
            self.candidates_considered, self.algorithm, self.duration_ms
        );
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &TypoArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TypoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
