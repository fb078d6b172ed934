use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a list endpoint result (categories, tags, ...) as a one-column CSV with header.
pub fn save_list_csv<P: AsRef<Path>>(items: &[String], column: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record([column])?;
    for item in items {
        let cell = guard_formula(item);
        wtr.write_record([&*cell])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prefix cells that spreadsheet apps would evaluate as formulas with a single quote.
fn guard_formula(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{}", cell))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save any serializable value (a list, a tag, a raw SQL response) as pretty JSON.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
