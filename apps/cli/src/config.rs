use std::path::PathBuf;

pub struct Config {
    pub csv_path: Option<PathBuf>,
    pub log_format: String,
    pub allocation_preset: Option<String>,
    pub era_preset: Option<String>,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_parts(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// Builds the config from a positional path argument and a variable
    /// lookup. The argument wins over `CF_CSV_PATH`.
    pub fn from_parts(arg_path: Option<String>, var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let csv_path = arg_path
            .filter(|p| !p.trim().is_empty())
            .or_else(|| non_empty("CF_CSV_PATH"))
            .map(PathBuf::from);
        let log_format = non_empty("CF_LOG_FORMAT").unwrap_or_else(|| "text".to_string());
        let pretty = non_empty("CF_PRETTY")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            csv_path,
            log_format,
            allocation_preset: non_empty("CF_ALLOCATION_PRESET"),
            era_preset: non_empty("CF_ERA_PRESET"),
            pretty,
        }
    }
}
