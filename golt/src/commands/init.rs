//! Init command implementation.
//!
//! Writes a `golt.toml` holding the default output settings, ready to be
//! edited.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{GoltError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the configuration into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Run the init command, reporting the written file on `out`.
pub fn run_init(args: InitArgs, out: &mut dyn Write) -> Result<()> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(GoltError::Config(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            config_path.display()
        )));
    }

    Config::default().save_to_path(&config_path)?;
    info!(path = %config_path.display(), "wrote configuration");

    writeln!(out, "Created {}", config_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let args = InitArgs {
            path: Some(temp_dir.path().join("project")),
            force: false,
        };

        let mut out = Vec::new();
        run_init(args, &mut out).unwrap();

        let config_path = temp_dir.path().join("project").join(CONFIG_FILE_NAME);
        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
        assert!(String::from_utf8(out).unwrap().starts_with("Created "));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            force: false,
        };
        let err = run_init(args, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, GoltError::Config(_)));

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("json"));
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "not toml at all").unwrap();

        let args = InitArgs {
            path: Some(temp_dir.path().to_path_buf()),
            force: true,
        };
        run_init(args, &mut Vec::<u8>::new()).unwrap();

        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }
}
