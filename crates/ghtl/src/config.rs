//! Command-line configuration for ghtl
//!
//! This module provides the argument parser and the derived settings the
//! run pipeline needs: which repository to read, where the API lives, how
//! many pages to request, whether to color output and how loud to log.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use ghtl_github::{DEFAULT_API_URL, FetchOptions};

/// ghtl - print a repository's commits, issues and pull requests as one timeline
#[derive(Parser, Debug, Clone)]
#[command(name = "ghtl")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repository: String,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Maximum pages of 100 items to request per endpoint
    ///
    /// The default of 1 fetches only the most recent 100 commits and the
    /// most recent 100 issues and pull requests.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// When to color the timeline
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the timeline.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Color selection for rendered output
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no decision for the given output
    #[must_use]
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: String::new(),
            repository: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            pages: 1,
            color: ColorMode::default(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Build fetch options from the API URL and page limit
    #[must_use]
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::default()
            .with_api_url(&self.api_url)
            .with_max_pages(self.pages)
    }

    /// Whether the timeline written to stdout should be colored
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.enabled(std::io::stdout().is_terminal())
    }

    /// `owner/repository` for log and error messages
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The owner or repository is empty or contains a `/`
    /// - The API URL is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_segment("owner", &self.owner)?;
        check_segment("repository", &self.repository)?;

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

fn check_segment(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(name));
    }
    if value.contains('/') {
        return Err(ConfigError::InvalidSegment {
            name,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required argument was empty
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// An owner or repository name contained a path separator
    #[error("invalid {name} `{value}`: must not contain '/'")]
    InvalidSegment {
        /// Which argument was invalid
        name: &'static str,
        /// The offending value
        value: String,
    },

    /// The API URL is not http(s)
    #[error("invalid API URL `{0}`: expected http:// or https://")]
    InvalidApiUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            owner: "octo".to_string(),
            repository: "demo".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.pages, 1);
        assert_eq!(config.color, ColorMode::Auto);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_fetch_options_from_config() {
        let config = Config {
            api_url: "http://127.0.0.1:9000/".to_string(),
            pages: 3,
            ..valid()
        };
        let options = config.fetch_options();
        assert_eq!(options.api_url, "http://127.0.0.1:9000");
        assert_eq!(options.max_pages, 3);
        assert_eq!(options.per_page, 100);
    }

    #[test]
    fn test_slug() {
        assert_eq!(valid().slug(), "octo/demo");
    }

    #[test]
    fn test_color_mode_resolution() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(valid().log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..valid()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..valid()
        };
        assert_eq!(config.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_owner() {
        let config = Config {
            owner: "  ".to_string(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Empty("owner"))));
    }

    #[test]
    fn test_validate_slash_in_repository() {
        let config = Config {
            repository: "demo/extra".to_string(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSegment {
                name: "repository",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_bad_api_url() {
        let config = Config {
            api_url: "ftp://example.com".to_string(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
