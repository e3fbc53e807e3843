use std::{env, path::PathBuf};

use getopts::Options;
use tracing::warn;

use crate::{config::CONFIG_FILE, error::AppError};

#[derive(Clone, Debug, Default)]
pub struct Args {
    pub cfg_file: PathBuf,
    // test helper
    pub cfg_str: Option<String>,
    pub chips: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("n", "chips", "number of Hydround chips on the farmland (1-20)", "N");
    opts.optopt("s", "seed", "seed for a reproducible scan", "SEED");
    opts.optflag("j", "json", "print the scan as JSON");
    opts.optflag("h", "help", "print this help");
    opts
}

pub fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options] [config_file]", program);
    print!("{}", opts.usage(&brief));
}

/// Parses `args` (without the program name). `Ok(None)` means help was asked for.
pub fn parse_args(args: &[String], opts: &Options) -> Result<Option<Args>, AppError> {
    let matches = opts.parse(args).map_err(|f| AppError::InvalidArgument(f.to_string()))?;
    if matches.opt_present("h") {
        return Ok(None);
    }

    let chips = matches
        .opt_str("n")
        .map(|n| n.parse::<usize>().map_err(|_| AppError::InvalidArgument(format!("chips: '{}'", n))))
        .transpose()?;
    let seed = matches
        .opt_str("s")
        .map(|s| s.parse::<u64>().map_err(|_| AppError::InvalidArgument(format!("seed: '{}'", s))))
        .transpose()?;

    let cfg_file = match matches.free.first() {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                warn!("Config file '{}' does not exist. Proceeding with defaults.", path.display());
            }
            path
        }
        None => default_cfg_file(),
    };

    Ok(Some(Args { cfg_file, cfg_str: None, chips, seed, json: matches.opt_present("j") }))
}

pub fn get_args() -> Result<Option<Args>, AppError> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "hydround".to_owned());
    let opts = options();
    let parsed = parse_args(args.get(1..).unwrap_or_default(), &opts)?;
    if parsed.is_none() {
        print_usage(&program, &opts);
    }
    Ok(parsed)
}

pub fn default_cfg_file() -> PathBuf {
    env::current_dir().unwrap_or_default().join(CONFIG_FILE)
}
