//! CSV loader for batches of questionnaire answers.
//!
//! ## CSV Format
//!
//! Headers are the answer wire names. Column order does **not** matter and
//! every column is optional; an empty cell is the same as an unanswered
//! question. Header names are case-sensitive and an unrecognised header is
//! an error, so a misspelt column cannot silently score as zero.
//!
//! | Column              | Used for scoring | Notes                                   |
//! |---------------------|------------------|-----------------------------------------|
//! | `productName`       | no               | Free text                               |
//! | `businessType`      | no               | `street`, `shop`, `online` or `service` |
//! | `targetCustomer`    | no               | Free text                               |
//! | `problemSolved`     | no               | Free text                               |
//! | `pricePoint`        | yes              | EUR per unit                            |
//! | `costPrice`         | yes              | EUR per unit                            |
//! | `dailyTraffic`      | yes              | Potential customers per day             |
//! | `conversionRate`    | yes              | Percent, e.g. `2` for 2%                |
//! | `monthlyExpenses`   | yes              | EUR                                     |
//! | `initialInvestment` | yes              | EUR; defaults to 1000 when empty        |
//!
//! ### Example
//!
//! ```csv
//! productName,pricePoint,costPrice,dailyTraffic,conversionRate,monthlyExpenses,initialInvestment
//! Street coffee,5,1.5,1500,2,500,1000
//! Online prints,25,9,300,3,150,
//! ```

use std::path::Path;

use tracing::debug;
use venture_core::{AnswerSet, FieldId};

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, ragged
    /// rows, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A header is not one of the answer wire names.
    #[error("unrecognised column '{0}'")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text and return one [`AnswerSet`] per data row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::UnknownColumn] – if a header is not an answer wire name.
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid.
pub fn load_from_str(input: &str) -> Result<Vec<AnswerSet>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    if let Some(unknown) = reader
        .headers()?
        .iter()
        .find(|header| FieldId::parse(header).is_none())
    {
        return Err(CsvLoadError::UnknownColumn(unknown.to_string()));
    }

    let answers = reader
        .deserialize::<AnswerSet>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = answers.len(), "parsed answer sets from CSV");
    Ok(answers)
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<AnswerSet>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
