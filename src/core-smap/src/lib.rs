//! # Sitemap Generation Library
//!
//! Writes XML sitemap files following the sitemaps.org protocol.
//!
//! Entries are added to a [`UrlSet`], which buffers their serialized XML and writes a new file
//! whenever the next entry would exceed the per-file limits (50,000 entries, 50 MiB by default).
//!
//! ## Features
//!
//! - `<url>` and `<sitemap>` entries with `lastmod`, `changefreq` and `priority`
//! - `<urlset>` and `<sitemapindex>` documents
//! - Automatic file rotation: `sitemap.xml`, `sitemap1.xml`, `sitemap2.xml`, ...
//! - Optional gzip output (`.gz`)
//! - Limits configurable in code or through the environment
//!
//! ## Examples
//!
//! ### Content sitemap
//!
//! ```no_run
//! use chrono::Utc;
//! use core_smap::{ChangeFrequency, Entry, UrlSet, UrlSetOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = UrlSetOptions::builder("sitemap", "public").compression(true).build()?;
//!     let mut url_set = UrlSet::new(options)?;
//!
//!     url_set.add(
//!         Entry::new("https://example.com/")?
//!             .last_modified_w3c(&Utc::now())
//!             .change_frequency(ChangeFrequency::Daily)
//!             .priority(0.8),
//!     )?;
//!     url_set.add("https://example.com/about")?;
//!
//!     let files = url_set.finish()?;
//!     println!("Wrote {:?}", files);
//!     Ok(())
//! }
//! ```
//!
//! ### Index of the generated files
//!
//! ```no_run
//! use core_smap::{Entry, UrlSet, UrlSetOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut index = UrlSet::new(UrlSetOptions::builder("sitemap_index", "public").sitemap_index().build()?)?;
//!     for name in ["sitemap.gz", "sitemap1.gz"] {
//!         index.add(Entry::sitemap(format!("https://example.com/{}", name))?)?;
//!     }
//!     index.finish()?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod common;
mod entry;
mod errors;
mod options;
mod url_set;
pub mod xml;

// Public API re-exports
pub use entry::{ChangeFrequency, Entry, EntryKind, Fragment, IntoEntry, W3C_DATETIME_FORMAT};
pub use errors::{Result, SitemapError};
pub use options::{DEFAULT_MAX_BYTES_PER_FILE, DEFAULT_MAX_ENTRIES_PER_FILE, UrlSetOptions, UrlSetOptionsBuilder};
pub use url_set::{RootTag, UrlSet};

// Additional exports for advanced usage
pub use common::compression::{compress, compress_string, decompress, decompress_to_string};
pub use common::logging::setup_logging;
