//! Exclusion of labels by key before they are propagated onto generated
//! resources.
//!
//! The exclusion pattern is a single regular expression, tested against every
//! label key (never the value). Keys which match are dropped. Matching is not
//! anchored, so a pattern like `secret` drops `my-secret-label` as well; use
//! `^`/`$` to anchor it.
use regex::Regex;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::kvp::LabelMap;

#[derive(Debug, Snafu)]
pub enum FilterError {
    /// The exclusion pattern is not a valid regular expression. The labels are
    /// never passed through unfiltered in this case, as that would silently
    /// leak labels which were meant to be excluded.
    #[snafu(display("failed to compile labels exclusion pattern {pattern:?}"))]
    InvalidExclusionPattern {
        source: regex::Error,
        pattern: String,
    },
}

/// A compiled label exclusion pattern.
///
/// Construct this once (for example when the feature flags are loaded) and
/// reuse it across reconciliations to avoid compiling the pattern every time.
/// An empty pattern excludes nothing.
#[derive(Clone, Debug, Default)]
pub struct LabelExclusion {
    pattern: Option<Regex>,
}

impl LabelExclusion {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        if pattern.is_empty() {
            return Ok(Self::default());
        }

        let pattern = Regex::new(pattern).context(InvalidExclusionPatternSnafu { pattern })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns the source of the compiled pattern, or an empty string if no
    /// labels are excluded.
    pub fn as_str(&self) -> &str {
        self.pattern.as_ref().map_or("", Regex::as_str)
    }

    /// Returns whether a label with the given `key` would be dropped.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(key))
    }

    /// Removes every label whose key matches the exclusion pattern.
    ///
    /// If there is nothing to filter (no labels or no pattern), `labels` is
    /// handed back as is.
    pub fn filter(&self, labels: LabelMap) -> LabelMap {
        let Some(pattern) = &self.pattern else {
            return labels;
        };

        if labels.is_empty() {
            return labels;
        }

        let (kept, excluded): (LabelMap, LabelMap) = labels
            .into_iter()
            .partition(|(key, _)| !pattern.is_match(key));

        if !excluded.is_empty() {
            debug!(
                pattern = pattern.as_str(),
                excluded = ?excluded.keys().collect::<Vec<_>>(),
                "excluded labels from generated resources"
            );
        }

        kept
    }
}

/// Filters `labels` based on the `labels-exclusion-pattern` feature flag.
///
/// The pattern is compiled on every call. Use [`LabelExclusion`] directly when
/// the same pattern is applied repeatedly.
///
/// Returns the input unchanged if either `labels` or `exclusion_pattern` is
/// empty; in that case the pattern is not compiled at all.
pub fn filter_labels(labels: LabelMap, exclusion_pattern: &str) -> Result<LabelMap, FilterError> {
    if labels.is_empty() || exclusion_pattern.is_empty() {
        return Ok(labels);
    }

    Ok(LabelExclusion::new(exclusion_pattern)?.filter(labels))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn labels<const N: usize>(pairs: [(&str, &str); N]) -> LabelMap {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect()
    }

    #[rstest]
    #[case::no_pattern(labels([("x", "1"), ("secret-y", "2")]), "")]
    #[case::no_labels(labels([]), "^secret-")]
    #[case::neither(labels([]), "")]
    fn passes_through(#[case] input: LabelMap, #[case] pattern: &str) {
        let filtered = filter_labels(input.clone(), pattern).unwrap();
        assert_eq!(filtered, input);
    }

    #[rstest]
    #[case::prefix(
        labels([("x", "1"), ("secret-y", "2")]),
        "^secret-",
        labels([("x", "1")])
    )]
    #[case::unanchored(
        labels([("app", "a"), ("my-secret", "b"), ("secretive", "c")]),
        "secret",
        labels([("app", "a")])
    )]
    #[case::alternation(
        labels([("tekton.dev/pipeline", "p"), ("kubectl.kubernetes.io/last-applied", "{}"), ("team", "infra")]),
        "^(tekton\\.dev|kubectl\\.kubernetes\\.io)/",
        labels([("team", "infra")])
    )]
    #[case::matches_value_only(
        labels([("x", "secret-y")]),
        "^secret-",
        labels([("x", "secret-y")])
    )]
    #[case::drops_everything(labels([("a", "1"), ("b", "2")]), ".*", labels([]))]
    fn excludes_matching_keys(
        #[case] input: LabelMap,
        #[case] pattern: &str,
        #[case] expected: LabelMap,
    ) {
        let filtered = filter_labels(input, pattern).unwrap();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_is_set_difference() {
        let input = labels([
            ("app", "x"),
            ("secret-a", "1"),
            ("secret-b", "2"),
            ("team", "infra"),
        ]);
        let exclusion = LabelExclusion::new("^secret-").unwrap();
        let filtered = exclusion.filter(input.clone());

        for key in filtered.keys() {
            assert!(!exclusion.is_excluded(key));
        }
        for (key, value) in &input {
            if !exclusion.is_excluded(key) {
                assert_eq!(filtered.get(key), Some(value));
            }
        }
    }

    #[rstest]
    #[case("(")]
    #[case("[a-")]
    #[case("secret-(?<")]
    fn invalid_pattern(#[case] pattern: &str) {
        let err = filter_labels(labels([("x", "1")]), pattern).unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidExclusionPattern { pattern: ref p, .. } if p == pattern
        ));
    }

    #[test]
    fn invalid_pattern_is_not_compiled_for_empty_labels() {
        // Nothing to filter, so the pattern is never looked at.
        let filtered = filter_labels(LabelMap::new(), "(").unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn empty_exclusion_excludes_nothing() {
        let exclusion = LabelExclusion::new("").unwrap();

        assert_eq!(exclusion.as_str(), "");
        assert!(!exclusion.is_excluded("secret-y"));
        assert_eq!(
            exclusion.filter(labels([("secret-y", "2")])),
            labels([("secret-y", "2")])
        );
    }

    #[test]
    fn reusable_exclusion() {
        let exclusion = LabelExclusion::new("^internal/").unwrap();
        assert_eq!(exclusion.as_str(), "^internal/");

        assert_eq!(
            exclusion.filter(labels([("internal/a", "1"), ("b", "2")])),
            labels([("b", "2")])
        );
        assert_eq!(
            exclusion.filter(labels([("internal/c", "3"), ("d", "4")])),
            labels([("d", "4")])
        );
    }
}
