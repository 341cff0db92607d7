use clap::Parser;
use nebula_core::error::StoreError;
use nebula_core::store::PromptStore;
use thiserror::Error;

mod cli;
mod config;
mod handlers;
mod http;
mod spa;
mod tracing;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    ServerError(#[from] http::ServerError),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

pub const LOGO: &str = r#"
               _              _
 _ __    ___  | |__   _   _ | |   __ _
| '_ \  / _ \ | '_ \ | | | || |  / _` |
| | | ||  __/ | |_) || |_| || | | (_| |
|_| |_| \___| |_.__/  \__,_||_|  \__,_|
"#;

#[actix_web::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();

    let cli = cli::Cli::parse();
    tracing::init_tracing();

    match cli.command {
        Some(cli::Commands::Serve(args)) => {
            println!("{LOGO}");
            cli::commands::serve::handle_serve(args, cli.config).await
        }
        Some(cli::Commands::List) => {
            let config = config::Config::load(&cli.config)?.apply_env_overrides();
            let store = PromptStore::new(&config.storage.data_file);
            cli::commands::list::handle_list(store).await
        }
        None => {
            // No command specified, use flattened serve args
            println!("{LOGO}");
            cli::commands::serve::handle_serve(cli.serve_args, cli.config).await
        }
    }
}
