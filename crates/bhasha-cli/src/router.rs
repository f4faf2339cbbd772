//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands::{self, check::CheckOptions, fix::FixOptions};
use bhasha_core::config::SettingsStore;
use bhasha_core::error::BhashaResult;
use tracing::debug;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> BhashaResult<()> {
    let store = match &cli.settings {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::with_defaults(),
    };
    debug!(settings = %store.path().display(), "settings location");

    match cli.command {
        Commands::Check {
            file,
            tone,
            style,
            filter,
            doc_type,
            json,
            select,
        } => {
            let options = CheckOptions {
                file,
                tone,
                style,
                filter,
                doc_type,
                json,
                select,
            };
            commands::check::run(&store, options, cli.verbose).await
        }
        Commands::Fix {
            file,
            output,
            dry_run,
        } => {
            let options = FixOptions {
                file,
                output,
                dry_run,
            };
            commands::fix::run(&store, options, cli.verbose).await
        }
        Commands::Config { action } => route_config(&store, action),
    }
}

fn route_config(store: &SettingsStore, action: ConfigAction) -> BhashaResult<()> {
    match action {
        ConfigAction::Show => commands::config::show(store),
        ConfigAction::SetKey { key } => commands::config::set_key(store, &key),
        ConfigAction::SetModel { model } => commands::config::set_model(store, &model),
        ConfigAction::SetDocType { doc_type } => commands::config::set_doc_type(store, &doc_type),
    }
}
