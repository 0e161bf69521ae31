//! Commit type to group label classification.

use std::collections::BTreeMap;

use git_cl_commit::Commit;
use git_cl_config::default_groups;
use tracing::{debug, warn};

use crate::parser::COMMIT_TYPES;

/// Maps commit types to the changelog group they are listed under.
///
/// Keys are always a subset of [`COMMIT_TYPES`]; overrides replace labels but never
/// add keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    groups: BTreeMap<String, String>,
}

impl Default for GroupTable {
    fn default() -> Self {
        Self {
            groups: default_groups(),
        }
    }
}

impl GroupTable {
    /// Builds a table from a configured mapping.
    ///
    /// The mapping replaces the defaults entirely. Entries for types that are not
    /// recognized are ignored, and recognized types missing from the mapping are
    /// left unclassified.
    #[must_use]
    pub fn from_mapping(mapping: &BTreeMap<String, String>) -> Self {
        let groups = mapping
            .iter()
            .filter(|(commit_type, _)| {
                let known = is_known_type(commit_type);
                if !known {
                    warn!(%commit_type, "ignoring group for unknown commit type");
                }
                known
            })
            .map(|(t, g)| (t.clone(), g.clone()))
            .collect();

        Self { groups }
    }

    /// Replaces the group of `commit_type`.
    ///
    /// Does nothing and returns false if the type has no entry in the table.
    pub fn override_group(&mut self, commit_type: &str, group: impl Into<String>) -> bool {
        match self.groups.get_mut(commit_type) {
            Some(label) => {
                *label = group.into();
                debug!(%commit_type, group = %label, "overriding group");
                true
            }
            None => false,
        }
    }

    /// Returns the group label for a commit type.
    pub fn group_for(&self, commit_type: &str) -> Option<&str> {
        self.groups.get(commit_type).map(String::as_str)
    }

    /// Returns the group label for a commit, or `None` if it cannot be classified.
    pub fn classify(&self, commit: &Commit) -> Option<&str> {
        self.group_for(&commit.r#type)
    }

    /// Returns the underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.groups
    }
}

fn is_known_type(commit_type: &str) -> bool {
    COMMIT_TYPES.contains(&commit_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_match_parser_types() {
        let table = GroupTable::default();
        let keys: Vec<&str> = table.as_map().keys().map(String::as_str).collect();

        let mut types = COMMIT_TYPES.to_vec();
        types.sort_unstable();
        assert_eq!(keys, types);
    }

    #[test]
    fn test_default_classification() {
        let table = GroupTable::default();
        assert_eq!(table.group_for("feat"), Some("Feature"));
        assert_eq!(table.group_for("fix"), Some("Bugfix"));
        assert_eq!(table.group_for("refactor"), Some("Optimization"));
        assert_eq!(table.group_for("style"), Some("Usability"));
        assert_eq!(table.group_for("other"), Some("Other"));
    }

    #[test]
    fn test_override_known_type() {
        let mut table = GroupTable::default();
        assert!(table.override_group("doc", "Documentation"));

        let commit = Commit::new("doc", "update readme");
        assert_eq!(table.classify(&commit), Some("Documentation"));
        assert_eq!(table.group_for("chore"), Some("Other"));
    }

    #[test]
    fn test_override_unknown_type_is_noop() {
        let mut table = GroupTable::default();
        let before = table.clone();

        assert!(!table.override_group("docs", "Documentation"));
        assert_eq!(table, before);
        assert!(table.group_for("docs").is_none());
    }

    #[test]
    fn test_classify_unknown() {
        let table = GroupTable::default();
        let commit = Commit::new("build", "bump toolchain");
        assert!(table.classify(&commit).is_none());
    }

    #[test]
    fn test_from_mapping_replaces_defaults() {
        let mapping: BTreeMap<String, String> =
            [("feat".to_string(), "Added".to_string())].into();

        let table = GroupTable::from_mapping(&mapping);
        assert_eq!(table.group_for("feat"), Some("Added"));
        assert!(table.group_for("fix").is_none());
    }

    #[test]
    fn test_from_mapping_drops_unknown_types() {
        let mapping: BTreeMap<String, String> = [
            ("fix".to_string(), "Fixed".to_string()),
            ("security".to_string(), "Security".to_string()),
        ]
        .into();

        let table = GroupTable::from_mapping(&mapping);
        assert_eq!(table.as_map().len(), 1);
        assert!(table.group_for("security").is_none());
    }

    #[test]
    fn test_override_missing_recognized_type_is_noop() {
        let mapping: BTreeMap<String, String> =
            [("feat".to_string(), "Added".to_string())].into();

        let mut table = GroupTable::from_mapping(&mapping);
        assert!(!table.override_group("fix", "Fixed"));
        assert!(table.group_for("fix").is_none());
    }
}
