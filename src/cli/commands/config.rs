use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            header(format!("Configuration ({})", path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let fallback = default_editor();
            let chosen = editor.as_deref().unwrap_or(&fallback);

            if open_in(chosen, &path) {
                success(format!("Configuration file edited using '{}'", chosen));
            } else if chosen != fallback {
                warning(format!("Editor '{}' failed, trying '{}'", chosen, fallback));
                if open_in(&fallback, &path) {
                    success(format!("Configuration file edited using '{}'", fallback));
                } else {
                    error(format!("Could not open {} with '{}'", path.display(), fallback));
                }
            } else {
                error(format!("Could not open {} with '{}'", path.display(), chosen));
            }
        }
    }

    Ok(())
}
