use std::env::VarError;
use std::num::ParseIntError;

/// Overrides the maximum number of entries written to a single sitemap file.
pub const MAX_URLS_ENV_VAR: &str = "SITEMAP_MAX_URLS_PER_FILE";

/// Overrides the maximum size, in bytes, of a single (uncompressed) sitemap file.
pub const MAX_BYTES_ENV_VAR: &str = "SITEMAP_MAX_BYTES_PER_FILE";

/// Retrieves a positive per-file limit from the environment variable.
/// An unset variable is `Ok(None)`: the caller keeps its current limit.
pub fn limit_from_env(env_var_name: &str) -> Result<Option<usize>, LimitError> {
    let raw = match std::env::var(env_var_name) {
        Ok(v) => v,
        Err(VarError::NotPresent) => return Ok(None),
        Err(e) => {
            return Err(LimitError::UnreadableEnvVar {
                name: env_var_name.to_string(),
                error: e,
            });
        }
    };

    let limit = raw.trim().parse::<usize>().map_err(|error| LimitError::ParseIntError {
        name: env_var_name.to_string(),
        error,
    })?;
    if limit == 0 {
        return Err(LimitError::NonPositive(env_var_name.to_string()));
    }
    Ok(Some(limit))
}

#[derive(Debug)]
pub enum LimitError {
    ParseIntError { name: String, error: ParseIntError },
    NonPositive(String),
    UnreadableEnvVar { name: String, error: VarError },
}

impl std::error::Error for LimitError {}

impl std::fmt::Display for LimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::ParseIntError { name, error } => {
                write!(f, "Failed to parse environment variable {} as an integer: {}", name, error)
            }
            Self::NonPositive(name) => write!(f, "{} must be a positive number", name),
            Self::UnreadableEnvVar { name, error } => {
                write!(f, "Environment variable {} cannot be read: {}", name, error)
            }
        }
    }
}

impl From<LimitError> for crate::SitemapError {
    fn from(error: LimitError) -> Self {
        crate::SitemapError::InvalidValue(error.to_string())
    }
}
