use std::fmt;

use crate::config::{COUNTRY_COLUMN, GDP_COLUMN};
use crate::error::EtlError;
use crate::extract::RawTable;

/// The canonical record flowing through load and query.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    pub gdp_billion: f64,
}

/// Ordered records under the fixed (Country, GDP_USD_Billion) column pair.
/// Row order is source-document order; there is no key and no dedup.
#[derive(Debug, PartialEq)]
pub struct GdpTable {
    pub records: Vec<Record>,
}

impl fmt::Display for GdpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<36} {:>16}", COUNTRY_COLUMN, GDP_COLUMN)?;
        for record in &self.records {
            writeln!(f, "{:<36} {:>16}", record.country, record.gdp_billion)?;
        }
        Ok(())
    }
}

/// Convert every raw millions string into billions, preserving row order.
/// Any non-numeric value aborts the whole run; there is no partial-row skip.
pub fn transform(raw: RawTable) -> Result<GdpTable, EtlError> {
    let mut records = Vec::with_capacity(raw.rows.len());
    for row in raw.rows {
        let gdp_billion = millions_to_billions(&row.gdp_millions)?;
        records.push(Record {
            country: row.country,
            gdp_billion,
        });
    }
    Ok(GdpTable { records })
}

/// Strip thousands separators, parse, divide by 1000, round to 2 decimals.
fn millions_to_billions(raw: &str) -> Result<f64, EtlError> {
    let cleaned: String = raw.chars().filter(|&c| c != ',').collect();
    let millions: f64 = cleaned.trim().parse().map_err(|source| EtlError::Convert {
        value: raw.to_string(),
        source,
    })?;
    Ok(round2(millions / 1000.0))
}

/// Rounds half away from zero, so 0.999 becomes 1.0.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
