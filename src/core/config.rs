use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| default_editor().into());

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("{ed}: {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("{ed} exited with {status}")));
        }
        Ok(())
    }
}

fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}
