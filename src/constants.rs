//! Global constants for wallet-collector.
//!
//! Defaults for the run configuration and the built-in rule set live here so
//! the CLI and the library agree on them.

/// Default ceiling for individually collected files (100 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Name of the flat output directory created under the target directory
pub const FINDINGS_DIR_NAME: &str = "Findings";

/// Directory created under the system temp dir when no target is given
pub const DEFAULT_TARGET_DIR_NAME: &str = "wallet-collector";

/// Root scanned when no roots are given on the command line
pub const DEFAULT_ROOT: &str = ".";

/// Bytes per megabyte, used for human-readable size output
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Filename suffixes that mark a file as worth collecting.
///
/// Matched case-insensitively against the end of the file name, so compound
/// suffixes such as `.aes.json` are plain entries here.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".dat", ".wallet", ".keys", ".adb", ".log", ".chain", ".json", ".bin",
    ".db", ".sqlite", ".ldb", ".seed", ".backup", ".bak", ".txt",
    // Additional / proprietary
    ".aes.json", ".crypto", ".kdb", ".kdbx", ".gpg", ".pgp",
    ".kwallet", ".bip", ".p12", ".pfx", ".pem", ".asc",
    // Exodus
    ".seco",
];

/// Directory names copied wholesale (exact, case-sensitive)
pub const DEFAULT_FOLDER_NAMES: &[&str] = &[
    "Bitcoin", ".bitcoin",
    "Electrum", ".electrum",
    "Ethereum", ".ethereum",
    "Monero", ".bitmonero", ".monero",
    ".armory",
    // Wallet GUIs & extensions
    "MetaMask", "Jaxx", "Exodus", "Edge", "Bread",
];

// Process exit codes
/// Normal completion
pub const EXIT_OK: u8 = 0;

/// Traversal hit access denied while the abort policy was active
pub const EXIT_ACCESS_DENIED: u8 = 1;

/// Any other fatal failure
pub const EXIT_FAILURE: u8 = 2;
