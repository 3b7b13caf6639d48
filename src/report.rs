//! Plain-text dump of a table's counts.

use std::io::{self, Write};

use crate::frequency_table::FrequencyTable;

/// Writes one `key: count` line per entry, in slot order, followed by the
/// number of distinct keys and the current capacity.
pub fn write_counts<W: Write>(table: &FrequencyTable, mut out: W) -> io::Result<()> {
    for (key, count) in table.entries() {
        writeln!(out, "{key}: {count}")?;
    }
    writeln!(out, "Total number of strings: {}", table.live_count())?;
    writeln!(out, "Current size of the hash table: {}", table.capacity())?;
    out.flush()
}
