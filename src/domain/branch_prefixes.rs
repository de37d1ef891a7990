/// The allow-list from `pgb.branch`: literal prefixes of branch names.
///
/// Entries are comma-separated; surrounding whitespace is trimmed and empty
/// entries are dropped, so an empty setting allows no branch at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchPrefixes(Vec<String>);

impl BranchPrefixes {
    pub fn parse(raw: &str) -> Self {
        BranchPrefixes(
            raw.split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// True iff `branch` starts with one of the prefixes.
    ///
    /// Plain string prefixes, not path segments: `release` admits
    /// `release/1.0.0` and also `releases`.
    pub fn allows(&self, branch: &str) -> bool {
        self.0.iter().any(|prefix| branch.starts_with(prefix.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
