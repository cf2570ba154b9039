//! MenuFlow command line entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use domain::MenuService;
use manifest_store::FileManifestStore;
use menuflow::cli::Cli;
use menuflow::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. Resolve configuration
    let mut config = Config::from_env();
    if let Some(path) = &cli.data_path {
        config = config.with_data_path(path);
    }

    // 2. Initialize tracing
    menuflow::init_tracing(&config);

    // 3. Open the manifest
    let store = FileManifestStore::new(&config.data_path);
    let service = Arc::new(MenuService::new(store));
    tracing::debug!(path = %config.data_path.display(), "using manifest");

    // 4. Run the command
    let report = menuflow::commands::report(
        menuflow::commands::run(cli.command, service, &config).await,
    );
    println!("{}", report.body);
    if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
