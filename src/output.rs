// src/output.rs
use crate::comparison::ComparisonTable;
use crate::sequence::SampleSequence;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column header of the fixed-width table, e.g.
/// `#   x        RK1         RK2         RK4         Exact`
pub fn table_header(table: &ComparisonTable) -> String {
    let mut header = String::from("#   x");
    for (i, scheme) in table.columns.iter().enumerate() {
        let pad = if i == 0 { 8 } else { 9 };
        header.push_str(&" ".repeat(pad));
        header.push_str(scheme.column_name());
    }
    header.push_str("         Exact");
    header
}

/// Write one header line, then one fixed-width line per sample:
/// `x` as `%9.4f` followed by every scheme value and the exact value as
/// `%12.6f`.
pub fn write_comparison_table<W: Write>(
    writer: &mut W,
    table: &ComparisonTable,
) -> io::Result<()> {
    writeln!(writer, "{}", table_header(table))?;
    for row in &table.rows {
        write!(writer, "{:9.4}", row.x)?;
        for value in &row.values {
            write!(writer, " {:12.6}", value)?;
        }
        writeln!(writer, " {:12.6}", row.exact)?;
    }
    Ok(())
}

pub fn write_comparison_to_file<P: AsRef<Path>>(
    path: P,
    table: &ComparisonTable,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_comparison_table(&mut file, table)?;
    file.flush()
}

/// `index,x,y` header, then one row per sample in shortest round-trip form
pub fn write_sequence_to_csv<P: AsRef<Path>>(path: P, seq: &SampleSequence) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "index,x,y")?;
    for (i, (x, y)) in seq.points().enumerate() {
        writeln!(file, "{},{},{}", i, x, y)?;
    }
    file.flush()
}
