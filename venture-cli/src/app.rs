//! Entry points behind each `venture` subcommand.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use venture_core::{AnswerSet, FieldId, ScoringResult, VentureScorer, Wizard};

use crate::csv_loader;
use crate::prompt::Session;
use crate::report::{self, Report};

/// Answers given as command-line flags. Values are raw text and parsed
/// leniently, exactly like answers typed into the wizard.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScoreArgs {
    /// Short description of the product.
    #[arg(long)]
    pub name: Option<String>,

    /// One of street, shop, online, service.
    #[arg(long = "type")]
    pub business_type: Option<String>,

    /// Sale price per unit (EUR).
    #[arg(long)]
    pub price: Option<String>,

    /// Cost per unit (EUR).
    #[arg(long)]
    pub cost: Option<String>,

    /// Potential customers per day.
    #[arg(long)]
    pub traffic: Option<String>,

    /// Percent of visitors who buy.
    #[arg(long)]
    pub conversion: Option<String>,

    /// Fixed monthly expenses (EUR).
    #[arg(long)]
    pub expenses: Option<String>,

    /// Initial investment (EUR). Empty or zero uses the configured default.
    #[arg(long)]
    pub investment: Option<String>,
}

impl ScoreArgs {
    pub fn to_answers(&self) -> AnswerSet {
        let pairs = [
            (FieldId::ProductName, &self.name),
            (FieldId::BusinessType, &self.business_type),
            (FieldId::PricePoint, &self.price),
            (FieldId::CostPrice, &self.cost),
            (FieldId::DailyTraffic, &self.traffic),
            (FieldId::ConversionRate, &self.conversion),
            (FieldId::MonthlyExpenses, &self.expenses),
            (FieldId::InitialInvestment, &self.investment),
        ];

        let mut answers = AnswerSet::new();
        for (field, value) in pairs {
            if let Some(value) = value {
                answers.set(field, value.as_str());
            }
        }
        answers
    }
}

/// Runs the interactive questionnaire until the user quits.
pub fn run_wizard<R: BufRead, W: Write>(
    scorer: VentureScorer,
    input: R,
    output: W,
) -> io::Result<Option<ScoringResult>> {
    let mut session = Session::new(input, output, Wizard::with_scorer(scorer));
    session.run()
}

/// Scores the flag answers and writes the report.
pub fn run_score<W: Write>(
    scorer: &VentureScorer,
    args: &ScoreArgs,
    mut output: W,
) -> io::Result<ScoringResult> {
    let answers = args.to_answers();
    let result = scorer.score(&answers);
    writeln!(output, "{}", Report::new(&result).with_answers(&answers))?;
    Ok(result)
}

/// Scores every answer set, keeping input order.
pub fn score_batch(
    scorer: &VentureScorer,
    answers: Vec<AnswerSet>,
) -> Vec<(AnswerSet, ScoringResult)> {
    answers
        .into_iter()
        .map(|answers| {
            let result = scorer.score(&answers);
            (answers, result)
        })
        .collect()
}

/// Scores each row of the CSV file at `path` and writes one result row per
/// input row. Returns the number of rows scored.
pub fn run_batch<W: Write>(
    scorer: &VentureScorer,
    path: &Path,
    output: W,
) -> anyhow::Result<usize> {
    let answers = csv_loader::load_from_file(path)
        .with_context(|| format!("loading answers from {}", path.display()))?;
    if answers.is_empty() {
        warn!(path = %path.display(), "CSV file has no data rows");
    }

    let scored = score_batch(scorer, answers);
    report::write_csv(output, &scored).context("writing results")?;
    info!(rows = scored.len(), "batch scored");
    Ok(scored.len())
}
