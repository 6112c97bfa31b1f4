//! Zip packaging of a finished project tree.

use std::{
    fs::File,
    io::{self, Cursor, Seek, Write},
    path::{Component, Path},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

use gantry_core::{
    application::{ApplicationError, ports::{Archiver, PackedArchive}},
    error::{GantryError, GantryResult},
};

const FILE_MODE: u32 = 0o644;

/// Packages every regular file under a root into a zip archive.
///
/// Entries are visited in lexical order and named relative to the root with
/// forward slashes. Directories get no entry. Timestamps and permissions are
/// fixed, so two identical trees produce identical archives.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    compression: CompressionMethod,
}

impl ZipArchiver {
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store entries without compression.
    pub fn stored() -> Self {
        Self {
            compression: CompressionMethod::Stored,
        }
    }

    /// Write the archive straight to `dest`. Returns the number of entries.
    ///
    /// On failure the partially written file is removed.
    #[instrument(skip(self), fields(root = %root.display(), dest = %dest.display()))]
    pub fn archive_to_file(&self, root: &Path, dest: &Path) -> GantryResult<usize> {
        let file = File::create(dest).map_err(|e| archive_error(dest, e))?;
        match self.write_archive(root, file) {
            Ok((_, entries)) => Ok(entries),
            Err(e) => {
                let _ = std::fs::remove_file(dest);
                Err(e)
            }
        }
    }

    fn write_archive<W: Write + Seek>(&self, root: &Path, sink: W) -> GantryResult<(W, usize)> {
        let options = SimpleFileOptions::default()
            .compression_method(self.compression)
            .last_modified_time(DateTime::default())
            .unix_permissions(FILE_MODE);

        let mut writer = ZipWriter::new(sink);
        let mut entries = 0;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                archive_error(&path, e)
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name = entry_name(root, path)?;
            writer
                .start_file(name.as_str(), options)
                .map_err(|e| archive_error(path, e))?;

            let mut source = File::open(path).map_err(|e| archive_error(path, e))?;
            io::copy(&mut source, &mut writer).map_err(|e| archive_error(path, e))?;

            debug!(entry = %name, "Entry added");
            entries += 1;
        }

        let sink = writer.finish().map_err(|e| archive_error(root, e))?;
        Ok((sink, entries))
    }
}

impl Default for ZipArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipArchiver {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn archive(&self, root: &Path) -> GantryResult<PackedArchive> {
        let (cursor, entries) = self.write_archive(root, Cursor::new(Vec::new()))?;
        let bytes = cursor.into_inner();
        debug!(entries, bytes = bytes.len(), "Archive complete");
        Ok(PackedArchive { bytes, entries })
    }
}

/// Root-relative, slash-separated entry name.
fn entry_name(root: &Path, path: &Path) -> GantryResult<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| archive_error(path, format!("not under {}", root.display())))?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

fn archive_error(path: &Path, e: impl std::fmt::Display) -> GantryError {
    ApplicationError::ArchiveFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
