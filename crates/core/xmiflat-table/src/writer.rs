//! Streaming table writer over any `io::Write`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use xmiflat_types::{ConceptRecord, COLUMNS};

use crate::error::TableResult;
use crate::options::TableOptions;
use crate::row::render_row;

/// Writes [`ConceptRecord`] rows as delimited text.
///
/// The header row, when enabled, is written lazily with the first row or
/// on [`finish`](Self::finish), so an empty document still yields a
/// header-only table.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    null_token: String,
    header_pending: bool,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, options: &TableOptions) -> TableResult<Self> {
        let inner = csv::WriterBuilder::new()
            .delimiter(options.delimiter_byte()?)
            .has_headers(false)
            .from_writer(writer);
        Ok(Self {
            inner,
            null_token: options.null_token.clone(),
            header_pending: options.header,
            rows: 0,
        })
    }

    fn write_header_if_pending(&mut self) -> TableResult<()> {
        if self.header_pending {
            self.inner.write_record(COLUMNS)?;
            self.header_pending = false;
        }
        Ok(())
    }

    pub fn write(&mut self, record: &ConceptRecord) -> TableResult<()> {
        self.write_header_if_pending()?;
        self.inner
            .write_record(render_row(record, &self.null_token))?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> TableResult<()>
    where
        I: IntoIterator<Item = &'a ConceptRecord>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Rows written so far, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> TableResult<W> {
        self.write_header_if_pending()?;
        self.inner.flush()?;
        Ok(self.inner.into_inner()?)
    }
}

/// Render `records` into an in-memory string.
pub fn to_string(records: &[ConceptRecord], options: &TableOptions) -> TableResult<String> {
    let mut writer = TableWriter::new(Vec::new(), options)?;
    writer.write_all(records)?;
    let bytes = writer.finish()?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write `records` to a file at `path`, replacing it. Returns the row count.
pub fn write_table_file(
    path: &Path,
    records: &[ConceptRecord],
    options: &TableOptions,
) -> TableResult<usize> {
    let file = io::BufWriter::new(File::create(path)?);
    let mut writer = TableWriter::new(file, options)?;
    writer.write_all(records)?;
    let rows = writer.rows();
    writer.finish()?.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmiflat_types::{Mention, Span};

    fn records() -> Vec<ConceptRecord> {
        Mention {
            kind: "MedicationMention".to_string(),
            span: Span::new(0, 7),
            negated: false,
            confidence: None,
            uncertainty: None,
            conditional: None,
            generic: None,
            subject: None,
            concept_ids: vec![1, 2],
        }
        .into_records()
    }

    #[test]
    fn test_header_then_rows() {
        let out = to_string(&records(), &TableOptions::default()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], COLUMNS.join(","));
        assert!(lines[1].starts_with("MedicationMention,NULL,1,0,7,NULL,False,"));
        assert!(lines[2].starts_with("MedicationMention,NULL,2,"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = to_string(&[], &TableOptions::default()).unwrap();
        assert_eq!(out, format!("{}\n", COLUMNS.join(",")));

        let headless = TableOptions {
            header: false,
            ..TableOptions::default()
        };
        assert_eq!(to_string(&[], &headless).unwrap(), "");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let mut rs = records();
        rs[0].preferred_text = Some("Aspirin, 81 mg".to_string());
        rs[0].reconstructed_text = "say \"hi\"".to_string();
        let out = to_string(&rs[..1], &TableOptions::default()).unwrap();
        assert!(out.contains("\"Aspirin, 81 mg\""));
        assert!(out.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_tab_delimiter() {
        let opts = TableOptions {
            delimiter: "\t".to_string(),
            ..TableOptions::default()
        };
        let out = to_string(&records(), &opts).unwrap();
        assert!(out.starts_with("textsem\trefsem\tid\t"));
    }
}
