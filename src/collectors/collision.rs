use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// True if anything occupies `path`, dangling symlinks included
fn is_taken(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Pick a destination that does not exist yet by adding a numeric suffix.
///
/// `wallet.dat` becomes `wallet_1.dat`, then `wallet_2.dat`, and so on. Only
/// the final extension is kept apart from the stem, so `backup.aes.json`
/// becomes `backup.aes_1.json` and `.bitcoin` becomes `.bitcoin_1`.
///
/// The check and the later create are not atomic. Callers must be the only
/// writer of the parent directory.
pub fn resolve_collision(candidate: &Path) -> PathBuf {
    if !is_taken(candidate) {
        return candidate.to_path_buf();
    }

    let file_stem = candidate
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("file"));
    let extension = candidate.extension();

    let mut counter: u64 = 1;
    loop {
        let mut new_name = file_stem.clone();
        new_name.push(format!("_{}", counter));
        if let Some(extension) = extension {
            new_name.push(".");
            new_name.push(extension);
        }
        let new_path = candidate.with_file_name(new_name);
        if !is_taken(&new_path) {
            return new_path;
        }
        counter += 1;
    }
}
