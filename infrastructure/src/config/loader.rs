//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Application directory under the user's config dir
const APP_DIR: &str = "research-gates";

/// Project-level config file names, in lookup order
const PROJECT_FILES: [&str; 2] = ["research-gates.toml", ".research-gates.toml"];

/// Environment variable prefix; `__` separates sections from keys
pub const ENV_PREFIX: &str = "RESEARCH_GATES_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `RESEARCH_GATES_<SECTION>__<KEY>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./research-gates.toml` or `./.research-gates.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/research-gates/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/research-gates/config.toml if set,
    /// otherwise falls back to ~/.config/research-gates/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Variables: {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            );
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.gates.required_agent, "report-writer");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("research-gates"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "research-gates.toml",
                r#"
[gates]
notes_dir = "notes"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.gates.notes_dir, "notes");
            assert_eq!(config.gates.reports_dir, "files/reports");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".research-gates.toml", "[gates]\nnotes_dir = \"project\"\n")?;
            jail.create_file("custom.toml", "[gates]\nnotes_dir = \"explicit\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.gates.notes_dir, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("research-gates.toml", "[state]\npath = \"from-file.json\"\n")?;
            jail.set_env("RESEARCH_GATES_STATE__PATH", "from-env.json");
            jail.set_env("RESEARCH_GATES_GATES__PROBE_TIMEOUT_MS", "750");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.state.path, "from-env.json");
            assert_eq!(config.gates.probe_timeout_ms, Some(750));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("research-gates.toml", "[gates\nnotes_dir = 1")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
