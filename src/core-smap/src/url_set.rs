//! The URL-set accumulator: buffers serialized entries and rotates output files at the protocol limits.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::compression::compress_string;
use crate::entry::{EntryKind, IntoEntry};
use crate::errors::{Result, SitemapError};
use crate::options::UrlSetOptions;
use crate::xml::{self, SITEMAP_NAMESPACE};

/// Root element of a sitemap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RootTag {
    /// `<urlset>` of `<url>` entries.
    #[default]
    UrlSet,
    /// `<sitemapindex>` of `<sitemap>` entries.
    SitemapIndex,
}

impl RootTag {
    pub fn tag(&self) -> &'static str {
        match self {
            RootTag::UrlSet => "urlset",
            RootTag::SitemapIndex => "sitemapindex",
        }
    }

    /// The entry kind this root is expected to contain.
    pub fn entry_kind(&self) -> EntryKind {
        match self {
            RootTag::UrlSet => EntryKind::Url,
            RootTag::SitemapIndex => EntryKind::Sitemap,
        }
    }
}

/// Accumulates entries for one sitemap generation run.
///
/// Files are named `{base}.{ext}`, `{base}1.{ext}`, `{base}2.{ext}`, ... in the output directory.
/// A file is flushed when the next entry would push it over the byte limit or when it already
/// holds the maximum number of entries, so no file ever exceeds either limit and an entry is
/// never split across files.
///
/// ```no_run
/// use core_smap::{UrlSet, UrlSetOptions};
///
/// # fn example() -> core_smap::Result<()> {
/// let options = UrlSetOptions::builder("sitemap", "public").build()?;
/// let mut url_set = UrlSet::new(options)?;
/// url_set.add("https://example.com/")?.add("https://example.com/about")?;
/// let files = url_set.finish()?;
/// assert_eq!(files.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UrlSet {
    options: UrlSetOptions,
    /// Size of the document around the entries: declaration, root tags, newlines.
    overhead: usize,
    buffer: String,
    entry_count: usize,
    /// Always equal to `to_xml()?.len()`.
    byte_count: usize,
    files_written: usize,
    written: Vec<PathBuf>,
}

impl UrlSet {
    /// Creates the accumulator, creating the output directory (and parents) if it does not exist.
    pub fn new(options: UrlSetOptions) -> Result<Self> {
        std::fs::create_dir_all(&options.output_dir)?;
        let overhead = xml::document_overhead(options.root_tag.tag(), Some(SITEMAP_NAMESPACE))?;

        Ok(Self {
            options,
            overhead,
            buffer: String::new(),
            entry_count: 0,
            byte_count: overhead,
            files_written: 0,
            written: Vec::new(),
        })
    }

    /// Adds an entry, first flushing the current file if the entry would not fit into it.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the input cannot become an entry, or if the entry alone is larger than a file may be
    /// - `Io` if a flush was needed and failed; the new entry is not added
    ///
    /// On error the already-buffered entries are untouched.
    pub fn add(&mut self, entry: impl IntoEntry) -> Result<&mut Self> {
        let entry = entry.into_entry()?;
        let fragment = entry.serialize()?;

        let max_bytes = self.options.max_bytes_per_file;
        if self.overhead + fragment.bytes > max_bytes {
            return Err(SitemapError::InvalidInput(format!(
                "Entry for {} is {} bytes and cannot fit into a file of at most {} bytes",
                entry.location(),
                fragment.bytes,
                max_bytes
            )));
        }

        if entry.kind() != self.options.root_tag.entry_kind() {
            warn!(
                location = entry.location(),
                kind = entry.kind().tag(),
                root = self.options.root_tag.tag(),
                "Entry kind does not match the root element"
            );
        }

        let over_bytes = self.byte_count + fragment.bytes > max_bytes;
        let at_capacity = self.entry_count == self.options.max_entries_per_file;
        if over_bytes || at_capacity {
            debug!(
                entries = self.entry_count,
                bytes = self.byte_count,
                over_bytes,
                at_capacity,
                "Rotating sitemap file"
            );
            self.write_file()?;
        }

        self.buffer.push_str(&fragment.xml);
        self.entry_count += 1;
        self.byte_count += fragment.bytes;
        Ok(self)
    }

    /// Renders the buffered entries as a complete, indented document.
    pub fn to_xml(&self) -> Result<String> {
        xml::render_document(self.options.root_tag.tag(), Some(SITEMAP_NAMESPACE), &self.buffer)
    }

    /// Writes the buffered entries to the next file of this run and resets the buffer.
    ///
    /// Returns the path written. If writing fails the buffer is kept so the call can be retried.
    pub fn write_file(&mut self) -> Result<PathBuf> {
        let document = self.to_xml()?;
        let (contents, extension) = if self.options.compression {
            (compress_string(&document)?, "gz")
        } else {
            (document.into_bytes(), "xml")
        };

        let path = self.next_path(extension);
        write_bytes(&path, &contents)?;
        info!(
            path = %path.display(),
            entries = self.entry_count,
            bytes = self.byte_count,
            written = contents.len(),
            "Wrote sitemap file"
        );

        self.files_written += 1;
        self.written.push(path.clone());
        self.reset();
        Ok(path)
    }

    /// Flushes whatever is buffered, even nothing, and ends the run.
    ///
    /// Returns every file written during the run, in order. The next entry added starts a new run
    /// whose first file is again the unsuffixed `{base}.{ext}`.
    pub fn finish(&mut self) -> Result<Vec<PathBuf>> {
        self.write_file()?;
        self.files_written = 0;
        Ok(std::mem::take(&mut self.written))
    }

    /// Entries in the current, unwritten file.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Size in bytes the current file would have if written now (before compression).
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Files written so far in the current run.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Paths written so far in the current run.
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn root_tag(&self) -> RootTag {
        self.options.root_tag
    }

    pub fn options(&self) -> &UrlSetOptions {
        &self.options
    }

    /// Enables or disables gzip for files written from now on.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.options.compression = enabled;
        self
    }

    fn next_path(&self, extension: &str) -> PathBuf {
        let filename = if self.files_written > 0 {
            format!("{}{}.{}", self.options.base_filename, self.files_written, extension)
        } else {
            format!("{}.{}", self.options.base_filename, extension)
        };
        self.options.output_dir.join(filename)
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.entry_count = 0;
        self.byte_count = self.overhead;
    }
}

fn write_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(())
}
