//! Feeds tokens from a reader or file into a `FrequencyTable`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::error::CountError;
use crate::filter::CharFilter;
use crate::frequency_table::{FrequencyTable, Upsert};
use crate::tokenize::{Token, Tokenizer};
use crate::validate::is_acceptable;

/// Tallies from one counting pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    /// Tokens offered to the table.
    pub accepted: u64,
    /// Tokens skipped for length or for not being valid UTF-8.
    pub rejected: u64,
    /// Accepted tokens that were new keys.
    pub inserted: u64,
}

/// Tokenizes `reader` and upserts every acceptable token into `table`.
///
/// Length is judged on raw bytes. Runs that are not valid UTF-8 are
/// rejected rather than converted, so distinct byte runs never share a key.
///
/// Stops at the first read or table error. Tokens already counted stay in the
/// table.
pub fn count_reader<R: BufRead>(
    reader: R,
    filter: &CharFilter,
    table: &mut FrequencyTable,
) -> Result<CountSummary, CountError> {
    let mut summary = CountSummary::default();
    for token in Tokenizer::new(reader, filter) {
        let token = match token? {
            Token::Text(s) if is_acceptable(&s) => s,
            Token::Text(s) => {
                trace!("skipping token of {} bytes", s.len());
                summary.rejected += 1;
                continue;
            }
            Token::Overlong(len) => {
                trace!("skipping token of {} bytes", len);
                summary.rejected += 1;
                continue;
            }
            Token::NotUtf8(bytes) => {
                trace!("skipping non-UTF-8 token of {} bytes", bytes.len());
                summary.rejected += 1;
                continue;
            }
        };
        if table.upsert(&token)? == Upsert::Inserted {
            summary.inserted += 1;
        }
        summary.accepted += 1;
    }
    Ok(summary)
}

/// Opens `path` and counts its tokens into `table`.
///
/// The file is opened before the table is touched, so an open failure leaves
/// the table unchanged.
pub fn count_file<P: AsRef<Path>>(
    path: P,
    filter: &CharFilter,
    table: &mut FrequencyTable,
) -> Result<CountSummary, CountError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CountError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("counting tokens from {}", path.display());
    count_reader(BufReader::new(file), filter, table)
}
