use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if !path.exists() {
            warning(format!(
                "No configuration file at {} (run `letssleep init`). Current settings:",
                path.display()
            ));
            println!("{}", cfg.to_yaml()?);
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
            info(format!("Saved {}", path.display()));
        }

        if !*print_config && !*edit_config {
            info("Use --print to show or --edit to change the configuration.");
        }
    }

    Ok(())
}
