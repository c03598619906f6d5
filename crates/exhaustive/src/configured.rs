//! Searcher construction from a configuration file.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use exhaustive_config::{ConfigError, SearchConfig};
use exhaustive_core::Result;
use exhaustive_search::Searcher;

/// Config file read by [`configured_searcher`] when callers have no path of
/// their own.
pub const DEFAULT_CONFIG_PATH: &str = "search.toml";

/// Builds a searcher from the TOML file at `path`.
///
/// A missing file is not an error: the searcher falls back to the default
/// configuration. A file that exists but does not parse is reported as
/// [`SearchError::Config`](exhaustive_core::SearchError::Config).
///
/// # Example
///
/// ```
/// use exhaustive::{configured_searcher, ThreadCount};
///
/// let searcher = configured_searcher("no/such/search.toml").unwrap();
/// assert_eq!(searcher.thread_count(), ThreadCount::None);
/// ```
pub fn configured_searcher(path: impl AsRef<Path>) -> Result<Searcher<'static>> {
    let path = path.as_ref();
    let config = match SearchConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!(event = "config_missing", path = %path.display());
            SearchConfig::default()
        }
        Err(err) => return Err(err.into()),
    };
    Searcher::from_config(&config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use exhaustive_core::SearchError;
    use exhaustive_test::{three_city_matrix, THREE_CITIES};

    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("exhaustive-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let searcher = configured_searcher("definitely/missing/search.toml").unwrap();
        let matrix = three_city_matrix();
        assert_eq!(searcher.has_tour_under(&THREE_CITIES, &matrix, 5), Ok(false));
    }

    #[test]
    fn test_file_limits_are_applied() {
        let path = write_temp(
            "limits.toml",
            r#"
            [termination]
            node_count_limit = 2
            "#,
        );
        let searcher = configured_searcher(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let matrix = three_city_matrix();
        assert_eq!(
            searcher.has_tour_under(&THREE_CITIES, &matrix, 5),
            Err(SearchError::Cancelled)
        );
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let path = write_temp("broken.toml", "thread_count = [");
        let result = configured_searcher(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}
