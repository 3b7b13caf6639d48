//! uniqstr: counts occurrences of distinct short strings with an
//! open-addressing frequency table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, specialized string -> count store whose growth can be
//!   reasoned about in isolation from the I/O that feeds it.
//! - Layers:
//!   - `hash`: polynomial rolling hash parameterized by capacity, so every
//!     entry can be re-placed when the capacity changes.
//!   - `FrequencyTable`: slot vector with linear probing; `upsert` is the
//!     only mutation and decides between insert and increment.
//!   - Collaborators: `CharFilter`, `Tokenizer`, `is_acceptable`, and the
//!     `count_reader`/`count_file` driver that glue input to the table.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; wrap the table in a
//!   lock for shared use.
//! - No deletion, so slots are only ever empty or occupied (no tombstones).
//! - `live / capacity <= load_factor` after every `upsert`; growth runs
//!   before probing, so a probe always finds a vacancy.
//! - Probes visit at most `capacity` slots.
//!
//! Growth
//! - New capacity is `capacity * growth_factor`. The replacement slot
//!   vector is allocated in full before any entry moves, then entries are
//!   moved (never copied) into it. Allocation failure leaves the old
//!   storage in place and surfaces as `TableError::OutOfMemory`.
//!
//! Ownership
//! - The table owns one copy of each key, made on first insertion with a
//!   fallible reservation. Borrowed views from `entries()` cannot outlive
//!   the next mutation.
//!
//! Errors and logging
//! - Errors are returned, never logged. Growth events are reported at
//!   `debug` level through the `log` facade; the crate installs no logger.

pub mod config;
pub mod error;
pub mod filter;
pub mod frequency_table;
#[cfg(test)]
mod frequency_table_proptest;
pub mod hash;
pub mod reader;
pub mod report;
pub mod tokenize;
pub mod validate;

// Public surface
pub use config::TableConfig;
pub use error::{CountError, TableError};
pub use filter::CharFilter;
pub use frequency_table::{Entries, FrequencyTable, IntoEntries, Upsert};
pub use reader::{count_file, count_reader, CountSummary};
pub use report::write_counts;
pub use tokenize::{Token, Tokenizer};
pub use validate::is_acceptable;
