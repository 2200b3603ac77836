use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Substring that marks a source subdirectory as an info directory
pub const INFO_DIR_PATTERN: &str = "info";
/// Removed from a discovered directory name to form the target name
pub const INFO_NAME_SUFFIX: &str = "_info";
/// Files with this suffix are handed to the build command
pub const INFO_CODE_EXTENSION: &str = ".go";
pub const INFO_COMPILE_PROGRAM: &str = "go";
pub const INFO_COMPILE_ARGS: &[&str] = &["build"];
pub const METADATA_FILE_NAME: &str = "metadata.json";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// The fixed constants the pipeline runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub dir_pattern: String,
    pub name_suffix: String,
    pub code_extension: String,
    pub compile_program: String,
    pub compile_args: Vec<String>,
    pub metadata_file_name: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            dir_pattern: INFO_DIR_PATTERN.to_string(),
            name_suffix: INFO_NAME_SUFFIX.to_string(),
            code_extension: INFO_CODE_EXTENSION.to_string(),
            compile_program: INFO_COMPILE_PROGRAM.to_string(),
            compile_args: INFO_COMPILE_ARGS.iter().map(|s| s.to_string()).collect(),
            metadata_file_name: METADATA_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InfopackConfig {
    pub pipeline: PipelineSettings,
    pub log_level: String,
    pub log_json: bool,
}

impl InfopackConfig {
    /// Reads the ambient settings from `INFOPACK_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let log_level = env::var("INFOPACK_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = match env::var("INFOPACK_LOG_JSON") {
            Ok(v) => v.parse::<bool>().map_err(|e| ConfigError::ParseError {
                field: "INFOPACK_LOG_JSON".to_string(),
                error: e.to_string(),
            })?,
            Err(_) => DEFAULT_LOG_JSON,
        };

        Ok(Self {
            pipeline: PipelineSettings::default(),
            log_level,
            log_json,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.pipeline.dir_pattern.is_empty() || self.pipeline.code_extension.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Directory pattern and code extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("dir_pattern".to_string(), self.pipeline.dir_pattern.clone());
        map.insert("name_suffix".to_string(), self.pipeline.name_suffix.clone());
        map.insert(
            "code_extension".to_string(),
            self.pipeline.code_extension.clone(),
        );
        map.insert(
            "compile_command".to_string(),
            format!(
                "{} {}",
                self.pipeline.compile_program,
                self.pipeline.compile_args.join(" ")
            ),
        );
        map.insert(
            "metadata_file_name".to_string(),
            self.pipeline.metadata_file_name.clone(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());

        map
    }
}

impl Default for InfopackConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineSettings::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
        }
    }
}

impl fmt::Display for InfopackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Infopack Configuration:")?;
        writeln!(f, "  Directory Pattern: {}", self.pipeline.dir_pattern)?;
        writeln!(f, "  Name Suffix: {}", self.pipeline.name_suffix)?;
        writeln!(f, "  Code Extension: {}", self.pipeline.code_extension)?;
        writeln!(
            f,
            "  Compile Command: {} {}",
            self.pipeline.compile_program,
            self.pipeline.compile_args.join(" ")
        )?;
        writeln!(f, "  Metadata File: {}", self.pipeline.metadata_file_name)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_pipeline_settings_are_fixed_constants() {
        let settings = PipelineSettings::default();

        assert_eq!(settings.dir_pattern, "info");
        assert_eq!(settings.name_suffix, "_info");
        assert_eq!(settings.code_extension, ".go");
        assert_eq!(settings.compile_program, "go");
        assert_eq!(settings.compile_args, vec!["build"]);
        assert_eq!(settings.metadata_file_name, "metadata.json");
    }

    #[test]
    #[serial]
    fn test_default_configuration_from_env() {
        let _guards = [
            EnvGuard::unset("INFOPACK_LOG_LEVEL"),
            EnvGuard::unset("INFOPACK_LOG_JSON"),
        ];

        let config = InfopackConfig::from_env().unwrap();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.log_json);
        assert_eq!(config.pipeline, PipelineSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set("INFOPACK_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("INFOPACK_LOG_JSON", "true"),
        ];

        let config = InfopackConfig::from_env().unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    #[serial]
    fn test_invalid_log_json_is_parse_error() {
        let _guard = EnvGuard::set("INFOPACK_LOG_JSON", "sometimes");

        let err = InfopackConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("INFOPACK_LOG_JSON"));
    }

    #[test]
    fn test_configuration_validation_invalid_log_level() {
        let config = InfopackConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };

        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn test_display_map_and_display() {
        let config = InfopackConfig::default();

        let map = config.to_display_map();
        assert_eq!(map.get("compile_command").unwrap(), "go build");
        assert_eq!(map.get("metadata_file_name").unwrap(), "metadata.json");

        let shown = config.to_string();
        assert!(shown.contains("Infopack Configuration:"));
        assert!(shown.contains("Code Extension: .go"));
    }
}
