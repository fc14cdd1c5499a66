use crate::Utils::config::LoggingConfig;
use simplelog::*;
use std::fs::File;

/// Installs the global logger: console and/or file, at the configured level.
///
/// Only the first successful call has an effect; later calls return `false`,
/// as does a configuration with every sink disabled. A log file that cannot be
/// created is skipped.
pub fn init_logger(config: &LoggingConfig) -> bool {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    if config.console {
        loggers.push(TermLogger::new(
            config.level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    // File logger
    if let Some(ref filename) = config.file {
        if let Ok(file) = File::create(filename) {
            loggers.push(WriteLogger::new(config.level, Config::default(), file));
        }
    }

    if loggers.is_empty() {
        return false;
    }
    CombinedLogger::init(loggers).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{LevelFilter, info};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_init_logger_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("diff.log");
        let config = LoggingConfig {
            level: LevelFilter::Info,
            console: false,
            file: Some(path.clone()),
        };
        let first = init_logger(&config);
        assert!(!init_logger(&config));
        if first {
            info!("logger test record");
            log::logger().flush();
            let text = fs::read_to_string(&path).unwrap();
            assert!(text.contains("logger test record"));
        }
    }

    #[test]
    fn test_nothing_enabled() {
        let config = LoggingConfig {
            level: LevelFilter::Off,
            console: false,
            file: None,
        };
        assert!(!init_logger(&config));
    }
}
