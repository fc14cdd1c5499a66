//! Run configuration of the differentiation engine, read from a TOML document.
//!
//! ```toml
//! [logging]
//! level = "debug"          # off | error | warn | info | debug | trace
//! console = true
//! file = "diff.log"
//!
//! [differentiation]
//! power_rule = "logarithmic"   # unchanged | logarithmic
//! variable = "x"
//! ```
//! Missing sections and keys take their default values, unknown keys are ignored.
use crate::symbolic::parse_expr::parse_leaf;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_engine_derivatives::PowerRule;
use crate::symbolic::symbolic_error::DiffError;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use toml::{Table, Value};

/// Where log records go and how verbose they are
#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub console: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LevelFilter::Info,
            console: true,
            file: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffConfig {
    pub logging: LoggingConfig,
    pub power_rule: PowerRule,
    /// `None` keeps the single implicit variable convention
    pub variable: Option<String>,
}

impl DiffConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, DiffError> {
        let document: Table = text
            .parse()
            .map_err(|e: toml::de::Error| DiffError::Config(e.message().to_string()))?;
        let mut config = DiffConfig::default();

        if let Some(logging) = section(&document, "logging")? {
            if let Some(level) = get_str(logging, "logging", "level")? {
                config.logging.level = LevelFilter::from_str(level).map_err(|_| {
                    DiffError::Config(format!("unknown log level '{}'", level))
                })?;
            }
            if let Some(console) = get_bool(logging, "logging", "console")? {
                config.logging.console = console;
            }
            if let Some(file) = get_str(logging, "logging", "file")? {
                config.logging.file = Some(PathBuf::from(file));
            }
        }

        if let Some(differentiation) = section(&document, "differentiation")? {
            if let Some(rule) = get_str(differentiation, "differentiation", "power_rule")? {
                config.power_rule = PowerRule::from_str(rule).map_err(|_| {
                    DiffError::Config(format!("unknown power rule '{}'", rule))
                })?;
            }
            if let Some(variable) = get_str(differentiation, "differentiation", "variable")? {
                match parse_leaf(variable) {
                    Ok(Expr::Var(name)) => config.variable = Some(name),
                    _ => {
                        return Err(DiffError::Config(format!(
                            "'{}' is not a variable name",
                            variable
                        )));
                    }
                }
            }
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| DiffError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}

fn section<'a>(document: &'a Table, name: &str) -> Result<Option<&'a Table>, DiffError> {
    match document.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(DiffError::Config(format!("[{}] must be a table", name))),
    }
}

fn get_str<'a>(table: &'a Table, section: &str, key: &str) -> Result<Option<&'a str>, DiffError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(DiffError::Config(format!("{}.{} must be a string", section, key))),
    }
}

fn get_bool(table: &Table, section: &str, key: &str) -> Result<Option<bool>, DiffError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Boolean(b)) => Ok(Some(*b)),
        Some(_) => Err(DiffError::Config(format!("{}.{} must be a boolean", section, key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DiffConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiffConfig::default());
        assert_eq!(config.logging.level, LevelFilter::Info);
        assert!(config.logging.console);
        assert_eq!(config.logging.file, None);
        assert_eq!(config.power_rule, PowerRule::Unchanged);
        assert_eq!(config.variable, None);
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            [logging]
            level = "debug"
            console = false
            file = "diff.log"
            colour = "ignored"

            [differentiation]
            power_rule = "logarithmic"
            variable = "t"
        "#;
        let config = DiffConfig::from_toml_str(text).unwrap();
        assert_eq!(config.logging.level, LevelFilter::Debug);
        assert!(!config.logging.console);
        assert_eq!(config.logging.file, Some(PathBuf::from("diff.log")));
        assert_eq!(config.power_rule, PowerRule::Logarithmic);
        assert_eq!(config.variable.as_deref(), Some("t"));
    }

    #[test]
    fn test_invalid_values() {
        for text in [
            "[logging]\nlevel = \"loud\"",
            "[logging]\nconsole = \"yes\"",
            "[differentiation]\npower_rule = \"chain\"",
            "[differentiation]\nvariable = \"2x\"",
            "differentiation = 5",
            "[logging\nlevel = \"info\"",
        ] {
            match DiffConfig::from_toml_str(text) {
                Err(DiffError::Config(_)) => {}
                other => panic!("{:?} should be rejected, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[differentiation]\npower_rule = \"unchanged\"\nvariable = \"x\"").unwrap();
        let config = DiffConfig::from_file(file.path()).unwrap();
        assert_eq!(config.variable.as_deref(), Some("x"));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            DiffConfig::from_file(&missing),
            Err(DiffError::Config(_))
        ));
    }
}
