use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{TimeRecord, TimingError};

/// Writes one `N time avg_ops min_ops max_ops` line per record.
pub fn write_time_table<W: Write>(writer: &mut W, records: &[TimeRecord]) -> io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{} {:.2} {:.2} {} {}",
            record.n, record.time, record.average_ops, record.min_ops, record.max_ops
        )?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the table into it.
pub fn save_time_table(path: &Path, records: &[TimeRecord]) -> Result<(), TimingError> {
    let io_err = |source| TimingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_time_table(&mut writer, records).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
