use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::model::{CellValue, Row, TabularDataset};

// ---------------------------------------------------------------------------
// FileHandle – reference to a not-yet-parsed source file
// ---------------------------------------------------------------------------

/// Handle to a raw source file attached to a file-source node. Parsing is
/// deferred until a downstream consumer actually needs the rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    pub path: PathBuf,
    /// Display name shown in the editor (usually the file name).
    pub name: String,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();
        Self { path, name }
    }
}

// ---------------------------------------------------------------------------
// DatasetLoader – async full-file parse boundary
// ---------------------------------------------------------------------------

/// Full-file tabular parser. The engine only ever awaits `parse_full`; which
/// formats are supported is the loader's business, and unsupported file types
/// reject with a descriptive error.
pub trait DatasetLoader {
    fn parse_full(
        &self,
        handle: &FileHandle,
    ) -> impl Future<Output = Result<TabularDataset>> + Send;
}

// ---------------------------------------------------------------------------
// CsvLoader – CSV/TSV implementation. Dispatch by extension.
// ---------------------------------------------------------------------------

/// Loads `.csv` and `.tsv` files into a [`TabularDataset`].
///
/// Cells are typed on read: empty → `Null`, parseable float → `Num`,
/// everything else → `Str`.
#[derive(Debug, Clone, Default)]
pub struct CsvLoader;

impl DatasetLoader for CsvLoader {
    async fn parse_full(&self, handle: &FileHandle) -> Result<TabularDataset> {
        let ext = handle
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let delimiter = match ext.as_str() {
            "csv" => b',',
            "tsv" => b'\t',
            other => bail!("Unsupported file extension: .{other}"),
        };

        log::debug!("parsing {} as delimited text", handle.path.display());
        read_delimited(&handle.path, delimiter)
    }
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<TabularDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .context("opening file")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("row {row_no}"))?;
        let mut row: Row = record.iter().map(type_cell).collect();
        // Clamp ragged records so the row-width invariant holds.
        row.truncate(headers.len());
        while row.len() < headers.len() {
            row.push(CellValue::Null);
        }
        rows.push(row);
    }

    Ok(TabularDataset::new(headers, rows))
}

fn type_cell(raw: &str) -> CellValue {
    let t = raw.trim();
    if t.is_empty() {
        return CellValue::Null;
    }
    if let Ok(v) = t.parse::<f64>() {
        if v.is_finite() {
            return CellValue::Num(v);
        }
    }
    CellValue::Str(t.to_string())
}
