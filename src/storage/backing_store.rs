//! Backing store - the page-organized byte image that faults are served from.
//!
//! The [`BackingStore`] trait is the only thing the translator needs from
//! secondary storage. Two implementations are provided:
//! - [`FileBackingStore`] - seek + read on a file (e.g. `BACKING_STORE.bin`)
//! - [`MemoryBackingStore`] - an in-memory image, for tests and benchmarks

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::common::config::{BACKING_STORE_SIZE, PAGE_SIZE};
use crate::common::{Error, PageNumber, Result};
use crate::storage::page::Page;

/// Read-only, random-access source of pages.
///
/// # File Layout
/// ```text
/// ┌─────────┬─────────┬─────────┬─────────┬──────────┐
/// │ Page 0  │ Page 1  │ Page 2  │  ...    │ Page 255 │
/// │ (256B)  │ (256B)  │ (256B)  │         │  (256B)  │
/// └─────────┴─────────┴─────────┴─────────┴──────────┘
/// Offset:  0       256      512     ...    255×256
/// ```
pub trait BackingStore {
    /// Read one full page.
    ///
    /// # Errors
    /// - `Error::TruncatedBackingStore` if fewer than `PAGE_SIZE` bytes exist
    ///   at the page's offset
    /// - `Error::Io` on seek or read failure
    fn read_page(&mut self, page_number: PageNumber) -> Result<Page>;
}

impl<B: BackingStore + ?Sized> BackingStore for &mut B {
    fn read_page(&mut self, page_number: PageNumber) -> Result<Page> {
        (**self).read_page(page_number)
    }
}

/// A backing store read from a file on disk.
///
/// # Thread Safety
/// `FileBackingStore` is single-threaded; the translator owns it.
#[derive(Debug)]
pub struct FileBackingStore {
    file: File,
    path: PathBuf,
    len: u64,
}

impl FileBackingStore {
    /// Open an existing backing store image.
    ///
    /// A file shorter than 256 pages is accepted; reading a page past its end
    /// fails with `TruncatedBackingStore`.
    ///
    /// # Errors
    /// Returns `Error::SourceUnavailable` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        let len = file.metadata()?.len();

        if len < BACKING_STORE_SIZE as u64 {
            warn!(
                path = %path.display(),
                len,
                expected = BACKING_STORE_SIZE,
                "backing store is shorter than the full address space"
            );
        }
        debug!(path = %path.display(), len, "opened backing store");

        Ok(Self { file, path, len })
    }

    /// Path the store was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the underlying file in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of complete pages in the file.
    #[inline]
    pub fn page_count(&self) -> u64 {
        self.len / PAGE_SIZE as u64
    }
}

impl BackingStore for FileBackingStore {
    fn read_page(&mut self, page_number: PageNumber) -> Result<Page> {
        self.file
            .seek(SeekFrom::Start(page_number.backing_store_offset()))?;

        let mut page = Page::new();
        let read = read_full(&mut self.file, page.as_mut_slice())?;
        if read < PAGE_SIZE {
            return Err(Error::TruncatedBackingStore {
                page: page_number.0,
                read,
            });
        }

        Ok(page)
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// A backing store held entirely in memory.
///
/// # Example
/// ```
/// use vmsim::storage::{BackingStore, MemoryBackingStore};
/// use vmsim::PageNumber;
///
/// let mut image = vec![0u8; 65536];
/// image[5 * 256] = 42;
/// let mut store = MemoryBackingStore::new(image);
///
/// let page = store.read_page(PageNumber::new(5)).unwrap();
/// assert_eq!(page.byte(0), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackingStore {
    data: Vec<u8>,
}

impl MemoryBackingStore {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// A full-size image filled with zeros.
    pub fn zeroed() -> Self {
        Self::new(vec![0u8; BACKING_STORE_SIZE])
    }

    /// Set a single byte of the image.
    ///
    /// # Panics
    /// Panics if `index` is past the end of the image.
    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.data[index] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl BackingStore for MemoryBackingStore {
    fn read_page(&mut self, page_number: PageNumber) -> Result<Page> {
        let start = page_number.backing_store_offset() as usize;
        let available = self.data.len().saturating_sub(start).min(PAGE_SIZE);
        if available < PAGE_SIZE {
            return Err(Error::TruncatedBackingStore {
                page: page_number.0,
                read: available,
            });
        }

        let mut page = Page::new();
        page.as_mut_slice()
            .copy_from_slice(&self.data[start..start + PAGE_SIZE]);
        Ok(page)
    }
}
