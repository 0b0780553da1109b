//! Storefront configuration

use std::path::PathBuf;

use clap::Args;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://kasimadalan.pe.hu/movies";

/// Default images base URL.
pub const DEFAULT_IMAGES_BASE_URL: &str = "http://kasimadalan.pe.hu/movies/images/";

/// Default account all cart operations run as.
pub const DEFAULT_USER_NAME: &str = "malis_movie";

/// Default location of the favorites file.
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

/// Backend resource paths, relative to the base URL.
#[derive(Debug, Clone, Copy)]
pub struct Endpoints;

impl Endpoints {
    /// Catalog listing (GET).
    pub const ALL_MOVIES: &'static str = "getAllMovies.php";

    /// Add a cart line (POST).
    pub const INSERT_MOVIE: &'static str = "insertMovie.php";

    /// List a user's cart lines (POST).
    pub const GET_CART: &'static str = "getMovieCart.php";

    /// Delete one cart line (POST).
    pub const DELETE_MOVIE: &'static str = "deleteMovie.php";
}

/// Backend and identity settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Base URL of the FilmStore backend
    #[arg(long, env = "FILMSTORE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Base URL movie images are resolved against
    #[arg(long, env = "FILMSTORE_IMAGES_BASE_URL", default_value = DEFAULT_IMAGES_BASE_URL)]
    pub images_base_url: String,

    /// Account name cart operations are performed for
    #[arg(long, env = "FILMSTORE_USER_NAME", default_value = DEFAULT_USER_NAME)]
    pub user_name: String,

    /// File favorite flags are stored in
    #[arg(long, env = "FILMSTORE_FAVORITES_PATH", default_value = DEFAULT_FAVORITES_PATH)]
    pub favorites_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            images_base_url: DEFAULT_IMAGES_BASE_URL.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
        }
    }
}

impl StoreConfig {
    /// Full URL for a backend endpoint.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// Full URL for a movie or cart line image.
    #[must_use]
    pub fn image_url(&self, image: &str) -> String {
        join_url(&self.images_base_url, image)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        store: StoreConfig,
    }

    #[test]
    fn endpoint_url_inserts_single_separator() {
        let config = StoreConfig::default();

        assert_eq!(
            config.endpoint_url(Endpoints::ALL_MOVIES),
            "http://kasimadalan.pe.hu/movies/getAllMovies.php"
        );
    }

    #[test]
    fn image_url_tolerates_trailing_slash_on_base() {
        let config = StoreConfig::default();

        assert_eq!(
            config.image_url("django.png"),
            "http://kasimadalan.pe.hu/movies/images/django.png"
        );
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let harness = Harness::try_parse_from([
            "filmstore",
            "--base-url",
            "http://localhost:9000/api/",
            "--user-name",
            "tester",
        ])?;

        assert_eq!(
            harness.store.endpoint_url(Endpoints::GET_CART),
            "http://localhost:9000/api/getMovieCart.php"
        );
        assert_eq!(harness.store.user_name, "tester");

        Ok(())
    }
}
