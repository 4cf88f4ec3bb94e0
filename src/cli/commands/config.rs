use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(editor)?;
            success("Configuration file edited.");
        }
    }

    Ok(())
}
