use hydround::config::{run_options::get_args, Config, OutputFormat};
use hydround::error::AppError;
use hydround::groundwater::scan::run_scan;
use hydround::report::{render_json, render_text};
use hydround::sensors::{RandomReadingSource, ReadingSource};
use hydround::time::RealTimeProvider;
use hydround::utils::{start_log, LogHandle};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let log = start_log::<RealTimeProvider>("info", None);

    match run(&log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(log: &LogHandle) -> Result<(), AppError> {
    let Some(args) = get_args()? else {
        return Ok(());
    };
    let config = Config::load(&args)?;
    log.set_filter(&config.log.filter)?;

    info!("Scanning farmland with {} Hydround chips...", config.scan.chips);

    let mut source: Box<dyn ReadingSource> = match config.scan.seed {
        Some(seed) => Box::new(RandomReadingSource::seeded(seed)),
        None => Box::new(RandomReadingSource::from_entropy()),
    };
    let report = run_scan(source.as_mut(), &RealTimeProvider, config.scan.chips);

    let output = match config.report.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{}", output);
    Ok(())
}
