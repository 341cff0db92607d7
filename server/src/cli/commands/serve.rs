use crate::cli::ServeArgs;
use crate::config::Config;
use crate::http::ApiServer;
use crate::CliError;
use nebula_core::store::PromptStore;

pub async fn handle_serve(serve_args: ServeArgs, config_path: String) -> Result<(), CliError> {
    let config = Config::load(&config_path)?
        .apply_env_overrides()
        .apply_cli_overrides(&serve_args);

    let store = PromptStore::new(&config.storage.data_file);

    let api_server = ApiServer::new(config, store);
    api_server.start().await?.await?;

    Ok(())
}
