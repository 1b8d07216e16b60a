use std::path::Path;

use tracing::info;

use crate::config::{COUNTRY_COLUMN, GDP_COLUMN};
use crate::error::EtlError;
use crate::transform::GdpTable;

/// Serialize the table to `path` with a header row and no index column,
/// overwriting whatever is there. Not atomic; a mid-write failure can leave a
/// truncated file.
pub fn write_csv(path: impl AsRef<Path>, table: &GdpTable) -> Result<(), EtlError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([COUNTRY_COLUMN, GDP_COLUMN])?;
    for record in &table.records {
        writer.write_record([record.country.as_str(), &record.gdp_billion.to_string()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    info!(rows = table.records.len(), path = %path.display(), "wrote csv");
    Ok(())
}
