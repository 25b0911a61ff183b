//! NDJSON corpus export.
//!
//! One record per line: `{"text":"...","label":0,"source":"sms"}`. NDJSON
//! streams well into training tools without loading the whole file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::UnifiedCorpus;

/// Write the corpus as NDJSON to a writer.
pub fn write_ndjson<W: Write>(corpus: &UnifiedCorpus, mut writer: W) -> io::Result<()> {
    for record in &corpus.records {
        let line = serde_json::to_string(record).map_err(io::Error::other)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Write the corpus as NDJSON to a file path.
pub fn write_ndjson_to_path(corpus: &UnifiedCorpus, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ndjson(corpus, &mut writer)?;
    writer.flush()
}
