use crate::config::Config;
use crate::errors::AppResult;

/// Print the effective configuration (after command-line overrides)
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("📄 Configuration file: {}\n", Config::config_file().display());
    println!("{}", cfg.to_yaml()?);
    Ok(())
}
