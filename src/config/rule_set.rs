use std::collections::HashSet;

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_FOLDER_NAMES};

/// Rules that decide which entries are worth collecting.
///
/// Extensions are stored lower-cased and matched as suffixes of the lower-cased
/// file name. Folder names are matched exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    extensions: HashSet<String>,
    folder_names: HashSet<String>,
}

impl RuleSet {
    /// Build a rule set from raw extension suffixes and folder names
    pub fn new<E, F>(extensions: E, folder_names: F) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        RuleSet {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            folder_names: folder_names.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `name` is exactly one of the configured wallet folder names
    pub fn is_wallet_folder(&self, name: &str) -> bool {
        self.folder_names.contains(name)
    }

    /// True if the lower-cased `file_name` ends with any configured suffix.
    ///
    /// The first matching suffix is enough; overlapping suffixes such as
    /// `.json` and `.aes.json` do not compound.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        let lowered = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lowered.ends_with(ext.as_str()))
    }

    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    pub fn folder_count(&self) -> usize {
        self.folder_names.len()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new(
            DEFAULT_EXTENSIONS.iter().copied(),
            DEFAULT_FOLDER_NAMES.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let rules = RuleSet::new([".dat"], Vec::<String>::new());
        assert!(rules.matches_extension("wallet.dat"));
        assert!(rules.matches_extension("WALLET.DAT"));
        assert!(rules.matches_extension("Wallet.Dat"));
        assert!(!rules.matches_extension("wallet.data"));
    }

    #[test]
    fn test_configured_extensions_are_lowercased() {
        let rules = RuleSet::new([".KDBX"], Vec::<String>::new());
        assert!(rules.matches_extension("passwords.kdbx"));
    }

    #[test]
    fn test_compound_suffix_matches() {
        let rules = RuleSet::new([".aes.json"], Vec::<String>::new());
        assert!(rules.matches_extension("backup.aes.json"));
        assert!(!rules.matches_extension("backup.json"));
    }

    #[test]
    fn test_empty_suffix_is_ignored() {
        let rules = RuleSet::new(["", ".seed"], Vec::<String>::new());
        assert_eq!(rules.extension_count(), 1);
        assert!(!rules.matches_extension("README"));
    }

    #[test]
    fn test_folder_match_is_exact_and_case_sensitive() {
        let rules = RuleSet::new(Vec::<String>::new(), ["Bitcoin", ".bitcoin"]);
        assert!(rules.is_wallet_folder("Bitcoin"));
        assert!(rules.is_wallet_folder(".bitcoin"));
        assert!(!rules.is_wallet_folder("bitcoin"));
        assert!(!rules.is_wallet_folder("Bitcoin-old"));
    }

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.extension_count(), DEFAULT_EXTENSIONS.len());
        assert_eq!(rules.folder_count(), DEFAULT_FOLDER_NAMES.len());
        assert!(rules.matches_extension("wallet.dat"));
        assert!(rules.matches_extension("exodus.seco"));
        assert!(rules.is_wallet_folder("Electrum"));
        assert!(rules.is_wallet_folder(".armory"));
        assert!(!rules.matches_extension("photo.jpg"));
    }
}
