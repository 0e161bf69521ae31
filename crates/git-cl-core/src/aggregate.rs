//! Grouping of parsed commits by group label.

use git_cl_commit::Commit;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::groups::GroupTable;

/// The commits filed under one group label, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitGroup {
    /// The group label, e.g. "Feature".
    pub label: String,

    /// The commits of this group.
    pub commits: Vec<Commit>,
}

/// Commits bucketed by group label.
///
/// Groups are kept in the order they were first populated, and a group is only
/// present once it holds at least one commit. Serializes as a list of
/// [`CommitGroup`] so templates can iterate it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedCommits {
    groups: Vec<CommitGroup>,
}

impl GroupedCommits {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a commit to the group `label`, creating the group on first use.
    pub fn push(&mut self, label: &str, commit: Commit) {
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.commits.push(commit),
            None => self.groups.push(CommitGroup {
                label: label.to_string(),
                commits: vec![commit],
            }),
        }
    }

    /// Returns the commits of a group.
    pub fn get(&self, label: &str) -> Option<&[Commit]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.commits.as_slice())
    }

    /// Returns the group labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    /// Returns an iterator over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, CommitGroup> {
        self.groups.iter()
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no commit was grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of grouped commits.
    pub fn commit_count(&self) -> usize {
        self.groups.iter().map(|g| g.commits.len()).sum()
    }
}

impl<'a> IntoIterator for &'a GroupedCommits {
    type Item = &'a CommitGroup;
    type IntoIter = std::slice::Iter<'a, CommitGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Files each commit under the group its type maps to.
///
/// Commits whose type has no group are reported to `sink` and dropped.
pub fn group_commits(
    commits: impl IntoIterator<Item = Commit>,
    table: &GroupTable,
    sink: &dyn DiagnosticSink,
) -> GroupedCommits {
    let mut grouped = GroupedCommits::new();

    for commit in commits {
        match table.classify(&commit) {
            Some(label) => grouped.push(label, commit),
            None => sink.report(Diagnostic::UnclassifiedCommit { commit }),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::parser::COMMIT_TYPES;
    use proptest::prelude::*;

    fn subjects(commits: &[Commit]) -> Vec<&str> {
        commits.iter().map(|c| c.subject.as_str()).collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let sink = MemorySink::new();
        let commits = vec![
            Commit::new("fix", "one"),
            Commit::new("feat", "two"),
            Commit::new("fix", "three"),
        ];

        let grouped = group_commits(commits, &GroupTable::default(), &sink);

        let labels: Vec<&str> = grouped.labels().collect();
        assert_eq!(labels, vec!["Bugfix", "Feature"]);
        assert_eq!(subjects(grouped.get("Bugfix").unwrap()), vec!["one", "three"]);
        assert_eq!(subjects(grouped.get("Feature").unwrap()), vec!["two"]);
    }

    #[test]
    fn test_types_sharing_a_label_share_a_group() {
        let sink = MemorySink::new();
        let commits = vec![
            Commit::new("refactor", "a"),
            Commit::new("perf", "b"),
            Commit::new("test", "c"),
        ];

        let grouped = group_commits(commits, &GroupTable::default(), &sink);

        assert_eq!(grouped.len(), 1);
        assert_eq!(subjects(grouped.get("Optimization").unwrap()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unclassified_commits_are_reported_and_dropped() {
        let sink = MemorySink::new();
        let mapping: BTreeMap<String, String> =
            [("feat".to_string(), "Feature".to_string())].into();
        let table = GroupTable::from_mapping(&mapping);

        let commits = vec![Commit::new("feat", "kept"), Commit::new("fix", "dropped")];
        let grouped = group_commits(commits, &table, &sink);

        assert_eq!(grouped.commit_count(), 1);
        assert!(grouped.get("Bugfix").is_none());
        assert_eq!(sink.unclassified(), vec![Commit::new("fix", "dropped")]);
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        let sink = MemorySink::new();
        let grouped = group_commits(Vec::new(), &GroupTable::default(), &sink);

        assert!(grouped.is_empty());
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_serializes_as_list() {
        let mut grouped = GroupedCommits::new();
        grouped.push("Feature", Commit::new("feat", "abcde"));

        let value = minijinja::Value::from_serialize(&grouped);
        assert_eq!(value.len(), Some(1));
    }

    proptest! {
        #[test]
        fn every_commit_lands_in_exactly_one_group(
            picks in proptest::collection::vec(0..COMMIT_TYPES.len(), 0..40)
        ) {
            let sink = MemorySink::new();
            let commits: Vec<Commit> = picks
                .iter()
                .enumerate()
                .map(|(i, &t)| Commit::new(COMMIT_TYPES[t], format!("c{i}")))
                .collect();

            let grouped = group_commits(commits.clone(), &GroupTable::default(), &sink);

            prop_assert_eq!(grouped.commit_count(), commits.len());
            prop_assert!(grouped.iter().all(|g| !g.commits.is_empty()));

            // Within each group the source order is preserved.
            for group in &grouped {
                let expected: Vec<&Commit> = commits
                    .iter()
                    .filter(|c| GroupTable::default().classify(c) == Some(group.label.as_str()))
                    .collect();
                let actual: Vec<&Commit> = group.commits.iter().collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
