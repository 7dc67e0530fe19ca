//! Platform-specific privilege checks.
//!
//! Wallet folders often sit in other users' profiles or system locations,
//! so the collector warns when it runs without elevated privileges.

#[cfg(unix)]
mod unix;

#[cfg(target_os = "windows")]
mod windows;

use log::{info, warn};

/// Check if the process is running with elevated privileges
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        unix::is_root()
    }
    #[cfg(target_os = "windows")]
    {
        windows::is_admin()
    }
    #[cfg(not(any(unix, target_os = "windows")))]
    {
        false
    }
}

/// Get instructions for elevating privileges on the current platform
pub fn get_elevation_instructions() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "run from an elevated prompt (right-click and 'Run as administrator')"
    }
    #[cfg(target_os = "macos")]
    {
        "run with sudo and grant Full Disk Access in System Settings > Privacy & Security"
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        "run with sudo: 'sudo wallet-collector ...'"
    }
    #[cfg(not(any(unix, target_os = "windows")))]
    {
        "run with elevated privileges appropriate for your operating system"
    }
}

/// Log whether the run is elevated, warning when it is not
pub fn warn_if_not_elevated() {
    if is_elevated() {
        info!("Running with elevated privileges");
    } else {
        warn!(
            "Running without elevated privileges - some paths may be unreadable; {}",
            get_elevation_instructions()
        );
    }
}
