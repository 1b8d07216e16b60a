use gdpscraper::{
    config::{Config, GDP_COLUMN},
    error::EtlError,
    extract, load,
    progress::ProgressLog,
    store, transform,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const FAILURE_TAG: &str = "ETL Job Failed";

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = Config::default();
    let progress = ProgressLog::new(&config.log_path);
    if let Err(err) = run(&config, &progress) {
        log_failure(&progress, &err);
    }
}

fn run(config: &Config, progress: &ProgressLog) -> Result<(), EtlError> {
    progress.log("Preliminaries complete. Initiating ETL process")?;

    let raw = extract::extract(&config.url)?;
    info!(rows = raw.rows.len(), "extraction complete");
    progress.log("Data extraction complete. Initiating Transformation process")?;

    let table = transform::transform(raw)?;
    progress.log("Data transformation complete. Initiating loading process")?;

    load::write_csv(&config.csv_path, &table)?;
    progress.log("Data saved to CSV file")?;

    let conn = store::open(&config.db_path)?;
    progress.log("SQL Connection initiated.")?;

    store::load_table(&conn, &config.table_name, &table)?;
    progress.log("Data loaded to Database as table. Running the query")?;

    let query = format!(
        "SELECT * FROM {} WHERE {} >= 100",
        config.table_name, GDP_COLUMN
    );
    store::run_query(&conn, &query)?;
    progress.log("Process Complete.")?;

    // Close only on success, matching the job's documented resource model;
    // on the failure path the handle is dropped at scope exit instead.
    conn.close().map_err(|(_, err)| EtlError::Store(err))?;
    Ok(())
}

/// The single failure boundary: one tagged log line, nothing on stdout, and
/// the process ends without re-raising or a distinguishing exit code.
fn log_failure(progress: &ProgressLog, err: &EtlError) {
    error!(%err, "{FAILURE_TAG}");
    if progress.log(&format!("{FAILURE_TAG}: {err}")).is_err() {
        error!("could not append the failure entry to the progress log");
    }
}
