use clap::Parser;
use shipfuel::core::ConfigProvider;
use shipfuel::utils::error::ErrorCategory;
use shipfuel::utils::{logger, validation::Validate};
use shipfuel::{CliConfig, Command, FileMassSource, FuelEngine, FuelError};

fn main() -> anyhow::Result<()> {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let Some(Command::Fuel { file }) = cli.command.clone() else {
        println!("Please supply a subcommand.");
        return Ok(());
    };

    let file_config = match cli.load_file_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    if let Some(config) = &file_config {
        if let Err(e) = config.validate() {
            fail(&e);
        }
    }

    let run_config = cli.run_config(file, file_config.as_ref());
    if let Err(e) = run_config.validate() {
        fail(&e);
    }

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, run_config.log_level())?;
    tracing::debug!("CLI config: {:?}", cli);

    let engine = FuelEngine::new(FileMassSource::from_config(&run_config));
    match engine.run(run_config.mode()) {
        Ok(report) => {
            println!("Fuel needed: {}", report.total);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &FuelError) -> ! {
    tracing::error!("{} ({:?})", e, e.category());
    tracing::debug!("Suggestion: {}", e.recovery_suggestion());
    match e.category() {
        ErrorCategory::Input => eprintln!("Error loading file: {}", e),
        ErrorCategory::Config => eprintln!("Error loading config: {}", e),
    }
    std::process::exit(1);
}
