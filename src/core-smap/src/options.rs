//! Configuration options for a sitemap accumulator.

use std::path::{Path, PathBuf};

use crate::common::limits::{MAX_BYTES_ENV_VAR, MAX_URLS_ENV_VAR, limit_from_env};
use crate::errors::{Result, SitemapError};
use crate::url_set::RootTag;
use crate::xml;

/// Protocol hard limit on the number of entries in one sitemap file.
pub const DEFAULT_MAX_ENTRIES_PER_FILE: usize = 50_000;

/// Protocol hard limit on the uncompressed size of one sitemap file (50 MiB).
pub const DEFAULT_MAX_BYTES_PER_FILE: usize = 52_428_800;

/// Configuration options for a `UrlSet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSetOptions {
    /// File name without extension, e.g. `sitemap` for `sitemap.xml`, `sitemap1.xml`, ...
    pub base_filename: String,
    /// Directory the files are written to. Created when the accumulator is built.
    pub output_dir: PathBuf,
    /// Maximum number of entries per file (default: 50,000)
    pub max_entries_per_file: usize,
    /// Maximum size of a rendered, uncompressed file in bytes (default: 52,428,800)
    pub max_bytes_per_file: usize,
    /// Gzip output files and use the `.gz` extension
    pub compression: bool,
    /// Root element of every file
    pub root_tag: RootTag,
}

impl UrlSetOptions {
    /// Creates a new builder. Base filename and output directory are always required.
    pub fn builder(base_filename: impl Into<String>, output_dir: impl AsRef<Path>) -> UrlSetOptionsBuilder {
        UrlSetOptionsBuilder {
            base_filename: base_filename.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
            max_entries_per_file: None,
            max_bytes_per_file: None,
            compression: false,
            root_tag: RootTag::default(),
            limits_from_env: false,
        }
    }
}

/// Builder for UrlSetOptions.
#[derive(Debug, Clone)]
pub struct UrlSetOptionsBuilder {
    base_filename: String,
    output_dir: PathBuf,
    max_entries_per_file: Option<usize>,
    max_bytes_per_file: Option<usize>,
    compression: bool,
    root_tag: RootTag,
    limits_from_env: bool,
}

impl UrlSetOptionsBuilder {
    /// Sets the maximum number of entries per file.
    pub fn max_entries_per_file(mut self, max: usize) -> Self {
        self.max_entries_per_file = Some(max);
        self
    }

    /// Sets the maximum rendered size of a file in bytes.
    pub fn max_bytes_per_file(mut self, max: usize) -> Self {
        self.max_bytes_per_file = Some(max);
        self
    }

    /// Enables or disables gzip output.
    pub fn compression(mut self, enabled: bool) -> Self {
        self.compression = enabled;
        self
    }

    /// Writes `<sitemapindex>` files instead of `<urlset>` files.
    pub fn sitemap_index(self) -> Self {
        self.root_tag(RootTag::SitemapIndex)
    }

    pub fn root_tag(mut self, root_tag: RootTag) -> Self {
        self.root_tag = root_tag;
        self
    }

    /// Lets `SITEMAP_MAX_URLS_PER_FILE` and `SITEMAP_MAX_BYTES_PER_FILE` override the limits at build time.
    pub fn limits_from_env(mut self) -> Self {
        self.limits_from_env = true;
        self
    }

    /// Builds the UrlSetOptions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if:
    /// - The base filename is empty
    /// - The entry limit is zero
    /// - The byte limit cannot hold an empty document
    /// - An environment override is set but is not a positive integer
    pub fn build(self) -> Result<UrlSetOptions> {
        let (env_entries, env_bytes) = if self.limits_from_env {
            (limit_from_env(MAX_URLS_ENV_VAR)?, limit_from_env(MAX_BYTES_ENV_VAR)?)
        } else {
            (None, None)
        };

        let max_entries_per_file = env_entries
            .or(self.max_entries_per_file)
            .unwrap_or(DEFAULT_MAX_ENTRIES_PER_FILE);
        let max_bytes_per_file = env_bytes
            .or(self.max_bytes_per_file)
            .unwrap_or(DEFAULT_MAX_BYTES_PER_FILE);

        if self.base_filename.trim().is_empty() {
            return Err(SitemapError::InvalidValue("Base filename must not be empty".to_string()));
        }
        if max_entries_per_file == 0 {
            return Err(SitemapError::InvalidValue(
                "Maximum entries per file must be positive".to_string(),
            ));
        }
        let overhead = xml::document_overhead(self.root_tag.tag(), Some(xml::SITEMAP_NAMESPACE))?;
        if max_bytes_per_file <= overhead {
            return Err(SitemapError::InvalidValue(format!(
                "Maximum bytes per file ({}) must exceed the empty document size ({})",
                max_bytes_per_file, overhead
            )));
        }

        Ok(UrlSetOptions {
            base_filename: self.base_filename,
            output_dir: self.output_dir,
            max_entries_per_file,
            max_bytes_per_file,
            compression: self.compression,
            root_tag: self.root_tag,
        })
    }
}
