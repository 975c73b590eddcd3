use cidr_conflict_check::config::Config;
use cidr_conflict_check::input::prompt_input_path;
use cidr_conflict_check::run_conflict_check;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    // No log4rs.yml in the working directory, log warnings to the console.
    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let input = match &config.input {
        Some(path) => path.clone(),
        None => prompt_input_path(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let summary = run_conflict_check(&config, &input)?;
    log::info!("#End main() {summary:?}");

    Ok(())
}
