//! Copy primitives that keep modification times and permission bits.
//!
//! Every write uses create-new semantics: a destination that already exists
//! is an error, never an overwrite.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use log::debug;
use walkdir::WalkDir;

/// Totals for one recursive folder copy
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeCopyStats {
    pub files: u64,
    pub directories: u64,
    pub symlinks: u64,
    pub bytes: u64,
}

/// Copy times first, then permissions, so a read-only source does not block the time update
fn apply_metadata(dest: &Path, metadata: &fs::Metadata) -> io::Result<()> {
    let accessed = FileTime::from_last_access_time(metadata);
    let modified = FileTime::from_last_modification_time(metadata);
    set_file_times(dest, accessed, modified)?;
    fs::set_permissions(dest, metadata.permissions())
}

/// Copy one regular file into a destination that must not exist yet.
///
/// Returns the number of bytes written. If anything fails after the
/// destination was created, the destination is removed again.
pub fn copy_file_with_metadata(source: &Path, dest: &Path) -> Result<u64> {
    debug!("Copying file from {} to {}", source.display(), dest.display());

    let mut reader = File::open(source)
        .context(format!("Failed to open {}", source.display()))?;
    let metadata = reader
        .metadata()
        .context(format!("Failed to get metadata for {}", source.display()))?;

    let writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .context(format!("Failed to create {}", dest.display()))?;

    let copied = write_contents(&mut reader, writer, source, dest).and_then(|bytes| {
        apply_metadata(dest, &metadata)
            .context(format!("Failed to apply metadata to {}", dest.display()))?;
        Ok(bytes)
    });

    if copied.is_err() {
        match fs::remove_file(dest) {
            Ok(()) => debug!("Removed incomplete copy {}", dest.display()),
            Err(e) => debug!("Failed to remove incomplete copy {}: {}", dest.display(), e),
        }
    }
    copied
}

fn write_contents(reader: &mut File, mut writer: File, source: &Path, dest: &Path) -> Result<u64> {
    let bytes = io::copy(reader, &mut writer)
        .context(format!("Failed to copy {} to {}", source.display(), dest.display()))?;
    writer
        .sync_all()
        .context(format!("Failed to flush {}", dest.display()))?;
    Ok(bytes)
}

/// Recreate a symlink at `dest` pointing where the one at `source` points
fn copy_symlink(source: &Path, dest: &Path) -> Result<()> {
    let target = fs::read_link(source)
        .context(format!("Failed to read link {}", source.display()))?;

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&target, dest)
            .context(format!("Failed to create symlink {}", dest.display()))?;
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::{symlink_dir, symlink_file};
        let created = if source.is_dir() {
            symlink_dir(&target, dest)
        } else {
            symlink_file(&target, dest)
        };
        created.context(format!("Failed to create symlink {}", dest.display()))?;
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = (target, dest);
        anyhow::bail!("Symbolic links are unsupported on this platform");
    }

    Ok(())
}

/// Recursively copy the directory `source` to a new directory `dest`.
///
/// `dest` must not exist. No size limit applies to anything inside. With
/// `follow_links` unset, symlinks are recreated as symlinks; with it set,
/// their targets are copied and link loops are reported as errors. The first
/// error aborts the copy and leaves whatever was already written in place.
pub fn copy_tree(source: &Path, dest: &Path, follow_links: bool) -> Result<TreeCopyStats> {
    debug!("Copying directory from {} to {}", source.display(), dest.display());

    let root_metadata = fs::metadata(source)
        .context(format!("Failed to get metadata for {}", source.display()))?;
    fs::create_dir(dest)
        .context(format!("Failed to create directory: {}", dest.display()))?;

    let mut stats = TreeCopyStats::default();
    let mut copied_dirs: Vec<(PathBuf, fs::Metadata)> = vec![(dest.to_path_buf(), root_metadata)];

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.context(format!("Failed to read under {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context(format!("Failed to get relative path for {}", entry.path().display()))?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir(&target)
                .context(format!("Failed to create directory: {}", target.display()))?;
            let metadata = entry
                .metadata()
                .context(format!("Failed to get metadata for {}", entry.path().display()))?;
            copied_dirs.push((target, metadata));
            stats.directories += 1;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            stats.symlinks += 1;
        } else if file_type.is_file() {
            stats.bytes += copy_file_with_metadata(entry.path(), &target)?;
            stats.files += 1;
        } else {
            debug!("Skipping special file {}", entry.path().display());
        }
    }

    // Children before parents
    for (dir, metadata) in copied_dirs.iter().rev() {
        apply_metadata(dir, metadata)
            .context(format!("Failed to apply metadata to {}", dir.display()))?;
    }

    Ok(stats)
}
