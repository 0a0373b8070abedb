use log::LevelFilter;
use timing::cli::Config;
use timing::handle_config;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();
    init_logging(config.verbosity);

    let records = handle_config(&config)?;
    println!(
        "wrote {} rows to {}",
        records.len(),
        config.output.display()
    );
    Ok(())
}
