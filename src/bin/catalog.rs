use lib::catalog::catalog_getter::{is_remote, LocalFile};
use lib::catalog::helpers::get_config;
use lib::catalog::models::Args;
use lib::catalog::run_tool::run;
use lib::catalog::selection_store::JsonSelectionFile;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = match get_config(&args.config_json_path) {
        Ok(config) => config,
        Err(err) => {
            error!("Could not read configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Browsing semester {} from {}",
        config.semester_label, config.catalog_source
    );
    let selection_store = JsonSelectionFile::new(&args.selection_json_path);

    /* Load the catalog and run the command */
    let result = if is_remote(&config.catalog_source) {
        run(reqwest::Client::new(), selection_store, &args.command, &config).await
    } else {
        run(LocalFile, selection_store, &args.command, &config).await
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
