use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::EtlError;

/// The GDP table is the third `tbody` on the page. Positional selection is
/// brittle, but the source is a pinned archive snapshot; if the layout ever
/// changes this constant is the only thing to retarget.
const TARGET_TBODY_INDEX: usize = 2;

/// Wikipedia renders "no data" as an em dash in the GDP cell.
const NO_DATA_MARKER: &str = "—";

/// One scraped row, GDP still the raw comma-grouped millions string.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub country: String,
    pub gdp_millions: String,
}

/// Scraped rows in document order. Discarded once transformed.
#[derive(Debug)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

/// Fetch the source page and parse the GDP table out of it.
pub fn extract(url: &Url) -> Result<RawTable, EtlError> {
    let html = fetch_page(url)?;
    parse_gdp_table(&html)
}

/// One unauthenticated GET, no retries.
pub fn fetch_page(url: &Url) -> Result<String, EtlError> {
    let body = Client::new()
        .get(url.clone())
        .send()?
        .error_for_status()?
        .text()?;
    debug!(bytes = body.len(), "fetched source page");
    Ok(body)
}

/// Parse the target `tbody` into rows of (country, raw GDP string).
///
/// A row is kept only when its first data cell contains a hyperlink (the
/// structural signal for a real country entry, as opposed to headers and
/// aggregate rows) and its third cell is not the "no data" placeholder.
/// Country name is the link text; the GDP string is the third cell's leading
/// text, leaving any footnote markup behind.
pub fn parse_gdp_table(html: &str) -> Result<RawTable, EtlError> {
    let tbody_sel = Selector::parse("tbody").expect("static selector should be valid");
    let tr_sel = Selector::parse("tr").expect("static selector should be valid");
    let td_sel = Selector::parse("td").expect("static selector should be valid");
    let a_sel = Selector::parse("a").expect("static selector should be valid");

    let doc = Html::parse_document(html);
    let tbody = doc
        .select(&tbody_sel)
        .nth(TARGET_TBODY_INDEX)
        .ok_or_else(|| {
            EtlError::Structure(format!(
                "page has fewer than {} tbody elements",
                TARGET_TBODY_INDEX + 1
            ))
        })?;

    let mut rows = Vec::new();
    for tr in tbody.select(&tr_sel) {
        let cells: Vec<ElementRef> = tr.select(&td_sel).collect();
        if cells.is_empty() {
            continue;
        }
        let link = match cells[0].select(&a_sel).next() {
            Some(link) => link,
            None => continue,
        };
        let gdp_cell = cells.get(2).ok_or_else(|| {
            EtlError::Structure("country row is missing its GDP cell".to_string())
        })?;
        let cell_text: String = gdp_cell.text().collect();
        if cell_text.contains(NO_DATA_MARKER) {
            continue;
        }
        let country = link.text().next().unwrap_or("").trim().to_string();
        let gdp_millions = gdp_cell.text().next().unwrap_or("").trim().to_string();
        rows.push(RawRow {
            country,
            gdp_millions,
        });
    }

    debug!(rows = rows.len(), "parsed GDP table");
    Ok(RawTable { rows })
}
