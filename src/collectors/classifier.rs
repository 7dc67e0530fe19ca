use crate::config::RuleSet;
use crate::models::{Classification, Entry, EntryKind};

/// Classify one entry against the rule set.
///
/// Directories can only produce a folder match and files can only produce a
/// file match; a file named `Bitcoin` or a directory named `keys.dat` is
/// never interesting.
pub fn classify(entry: &Entry, rules: &RuleSet) -> Classification {
    let name = entry.base_name();
    match entry.kind() {
        EntryKind::Directory if rules.is_wallet_folder(&name) => {
            Classification::FolderMatch(entry.clone())
        }
        EntryKind::File if rules.matches_extension(&name) => {
            Classification::FileMatch(entry.clone())
        }
        _ => Classification::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::new([".dat", ".seed"], ["Bitcoin", ".electrum"])
    }

    #[test]
    fn test_folder_match() {
        let entry = Entry::directory("/home/user/Bitcoin");
        assert_eq!(classify(&entry, &rules()), Classification::FolderMatch(entry));
    }

    #[test]
    fn test_hidden_folder_match() {
        let entry = Entry::directory("/home/user/.electrum");
        assert!(matches!(classify(&entry, &rules()), Classification::FolderMatch(_)));
    }

    #[test]
    fn test_file_match_any_case() {
        for name in ["wallet.dat", "WALLET.DAT", "phrase.Seed"] {
            let entry = Entry::file(format!("/data/{}", name));
            assert_eq!(classify(&entry, &rules()), Classification::FileMatch(entry.clone()));
        }
    }

    #[test]
    fn test_kind_mismatch_is_no_match() {
        assert_eq!(
            classify(&Entry::file("/data/Bitcoin"), &rules()),
            Classification::NoMatch
        );
        assert_eq!(
            classify(&Entry::directory("/data/keys.dat"), &rules()),
            Classification::NoMatch
        );
    }

    #[test]
    fn test_unrelated_entries() {
        let rules = rules();
        assert_eq!(classify(&Entry::file("/data/photo.jpg"), &rules), Classification::NoMatch);
        assert_eq!(classify(&Entry::directory("/data/bitcoin"), &rules), Classification::NoMatch);
        assert_eq!(classify(&Entry::directory("/"), &rules), Classification::NoMatch);
    }
}
