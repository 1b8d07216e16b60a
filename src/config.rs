use std::path::PathBuf;
use url::Url;

/// Name of the country column in every persisted output.
pub const COUNTRY_COLUMN: &str = "Country";
/// Name of the GDP column after transformation (billions of USD).
pub const GDP_COLUMN: &str = "GDP_USD_Billion";

/// Archived snapshot, pinned so the page structure cannot drift under us.
const SOURCE_URL: &str = "https://web.archive.org/web/20230902185326/https://en.wikipedia.org/wiki/List_of_countries_by_GDP_%28nominal%29";

/// Run configuration for the ETL job. There is no CLI surface; the defaults
/// are the one supported configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page the GDP table is scraped from.
    pub url: Url,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Destination relation inside the database, replaced wholesale each run.
    pub table_name: String,
    /// Flat-file output, overwritten each run.
    pub csv_path: PathBuf,
    /// Append-only progress log.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: Url::parse(SOURCE_URL).expect("source URL constant should be valid"),
            db_path: PathBuf::from("World_Economies.db"),
            table_name: "Countries_by_GDP".to_string(),
            csv_path: PathBuf::from("Countries_by_GDP.csv"),
            log_path: PathBuf::from("Etl_project_log.txt"),
        }
    }
}
