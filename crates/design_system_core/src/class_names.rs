//! Class-name composition.
//!
//! [`compose`] flattens an ordered list of [`ClassFragment`]s and resolves conflicts so that the
//! last token governing a styling concern wins. Components pass their base recipe first and the
//! caller's overrides last:
//!
//! ```rust
//! use design_system_core::{cn, compose};
//!
//! assert_eq!(
//!     compose(["flex items-center", "gap-2", "gap-4"]),
//!     "flex items-center gap-4"
//! );
//!
//! let loading = false;
//! assert_eq!(
//!     cn!["px-4 py-2", loading.then_some("opacity-50"), "px-6"],
//!     "py-2 px-6"
//! );
//! ```

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::class_groups::ParsedToken;

/// One conditional or literal class-name contribution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassFragment<'a> {
    /// One token or a whitespace-separated group of tokens.
    Text(Cow<'a, str>),
    /// Falsy placeholder; contributes nothing.
    #[default]
    Absent,
    /// Nested fragments, flattened in order.
    Group(Vec<ClassFragment<'a>>),
}

impl<'a> ClassFragment<'a> {
    /// Returns `text` when `condition` holds, otherwise [`ClassFragment::Absent`].
    pub fn when(condition: bool, text: impl Into<ClassFragment<'a>>) -> Self {
        if condition {
            text.into()
        } else {
            Self::Absent
        }
    }

    /// Picks one of two fragments.
    pub fn either(
        condition: bool,
        when_true: impl Into<ClassFragment<'a>>,
        when_false: impl Into<ClassFragment<'a>>,
    ) -> Self {
        if condition {
            when_true.into()
        } else {
            when_false.into()
        }
    }

    /// Returns `true` when the fragment contributes no tokens.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Absent => true,
            Self::Group(fragments) => fragments.iter().all(Self::is_empty),
        }
    }

    fn collect_tokens<'s>(&'s self, tokens: &mut Vec<&'s str>) {
        match self {
            Self::Text(text) => tokens.extend(text.split_whitespace()),
            Self::Absent => {}
            Self::Group(fragments) => {
                for fragment in fragments {
                    fragment.collect_tokens(tokens);
                }
            }
        }
    }
}

impl<'a> From<&'a str> for ClassFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassFragment<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<String> for ClassFragment<'a> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for ClassFragment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

/// Booleans are placeholders: `false` (and `true`) contribute nothing, so
/// `condition && "class"`-style expressions from other ecosystems map to
/// [`ClassFragment::when`].
impl<'a> From<bool> for ClassFragment<'a> {
    fn from(_: bool) -> Self {
        Self::Absent
    }
}

impl<'a> From<()> for ClassFragment<'a> {
    fn from(_: ()) -> Self {
        Self::Absent
    }
}

impl<'a, T> From<Option<T>> for ClassFragment<'a>
where
    T: Into<ClassFragment<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

impl<'a, T> From<Vec<T>> for ClassFragment<'a>
where
    T: Into<ClassFragment<'a>>,
{
    fn from(value: Vec<T>) -> Self {
        Self::Group(value.into_iter().map(Into::into).collect())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for ClassFragment<'a>
where
    T: Into<ClassFragment<'a>>,
{
    fn from(value: [T; N]) -> Self {
        Self::Group(value.into_iter().map(Into::into).collect())
    }
}

impl<'a> From<&'a [&'a str]> for ClassFragment<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Self::Group(value.iter().map(|&text| Self::from(text)).collect())
    }
}

/// Conflict-resolution policy applied by [`ClassComposer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Tokens governing the same styling concern collapse to the last one.
    #[default]
    ConcernGroups,
    /// Only exact duplicate tokens collapse; every distinct token is kept.
    DedupeOnly,
}

impl MergePolicy {
    /// Stable policy token.
    pub fn token(self) -> &'static str {
        match self {
            Self::ConcernGroups => "concern-groups",
            Self::DedupeOnly => "dedupe-only",
        }
    }
}

/// Class composer bound to one [`MergePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassComposer {
    policy: MergePolicy,
}

impl ClassComposer {
    /// Creates a composer for the given policy.
    pub const fn new(policy: MergePolicy) -> Self {
        Self { policy }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Merges `fragments` into one class string.
    ///
    /// Later tokens win: under [`MergePolicy::ConcernGroups`] a token drops every earlier token
    /// that governs the same concern (and the longhands of a shorthand), under
    /// [`MergePolicy::DedupeOnly`] only earlier exact duplicates are dropped. Surviving tokens keep
    /// their relative order. The result never has duplicate tokens, leading or trailing
    /// whitespace, and composing it again yields the same string.
    pub fn compose<'a, I, F>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: Into<ClassFragment<'a>>,
    {
        let fragments: Vec<ClassFragment<'a>> = fragments.into_iter().map(Into::into).collect();
        let mut tokens = Vec::new();
        for fragment in &fragments {
            fragment.collect_tokens(&mut tokens);
        }

        let kept = match self.policy {
            MergePolicy::ConcernGroups => merge_by_concern(&tokens),
            MergePolicy::DedupeOnly => dedupe(&tokens),
        };
        kept.join(" ")
    }
}

/// Merges fragments with [`MergePolicy::ConcernGroups`].
pub fn compose<'a, I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<ClassFragment<'a>>,
{
    ClassComposer::default().compose(fragments)
}

/// Composes a heterogeneous list of fragments.
///
/// Each argument may be anything convertible into a [`ClassFragment`]: string slices, owned
/// strings, `Option`s, booleans, nested arrays or vectors.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::compose([$($crate::ClassFragment::from($fragment)),+])
    };
}

fn merge_by_concern<'s>(tokens: &[&'s str]) -> Vec<&'s str> {
    let mut claimed = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    for &token in tokens.iter().rev() {
        let parsed = ParsedToken::parse(token);
        if claimed.contains(&parsed.conflict_key()) {
            continue;
        }
        claimed.extend(parsed.claims());
        kept.push(token);
    }
    kept.reverse();
    kept
}

fn dedupe<'s>(tokens: &[&'s str]) -> Vec<&'s str> {
    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .copied()
        .filter(|token| seen.insert(*token))
        .collect();
    kept.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_input_composes_to_empty_string() {
        assert_eq!(compose(Vec::<&str>::new()), "");
        assert_eq!(compose(["", "   ", "\t"]), "");
        assert_eq!(cn![], "");
    }

    #[test]
    fn later_gap_token_overrides_earlier_one() {
        assert_eq!(
            cn!["flex items-center", false, "gap-2", "gap-4"],
            "flex items-center gap-4"
        );
    }

    #[test]
    fn dedupe_only_policy_keeps_conflicting_tokens() {
        let composer = ClassComposer::new(MergePolicy::DedupeOnly);
        assert_eq!(
            composer.compose(["flex items-center", "gap-2", "gap-4", "flex"]),
            "items-center gap-2 gap-4 flex"
        );
    }

    #[test]
    fn nested_groups_and_options_are_flattened_in_order() {
        let extra: Option<&str> = None;
        let class = cn![
            "inline-flex",
            vec!["px-3 py-1.5", "text-sm"],
            extra,
            Some("rounded-md".to_string()),
            ["font-semibold", "text-lg"],
        ];
        assert_eq!(class, "inline-flex px-3 py-1.5 rounded-md font-semibold text-lg");
    }

    #[test]
    fn conditional_fragments_follow_their_condition() {
        assert_eq!(
            compose([
                ClassFragment::when(true, "opacity-50"),
                ClassFragment::when(false, "cursor-wait"),
                ClassFragment::either(false, "flex-row", "flex-col"),
            ]),
            "opacity-50 flex-col"
        );
    }

    #[test]
    fn shorthand_override_drops_earlier_longhands_only() {
        assert_eq!(compose(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(compose(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(compose(["inset-0", "bottom-0"]), "inset-0 bottom-0");
        assert_eq!(compose(["top-2 left-2", "inset-0"]), "inset-0");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            compose(["bg-red-500 hover:bg-red-600", "bg-blue-500"]),
            "hover:bg-red-600 bg-blue-500"
        );
        assert_eq!(
            compose(["md:w-[72vw] w-[92vw]", "md:w-[16rem]"]),
            "w-[92vw] md:w-[16rem]"
        );
    }

    #[test]
    fn size_and_color_of_text_do_not_conflict() {
        assert_eq!(
            compose(["text-base text-zinc-900", "text-lg"]),
            "text-zinc-900 text-lg"
        );
        assert_eq!(
            compose(["text-base text-zinc-900", "text-red-400"]),
            "text-base text-red-400"
        );
    }

    #[test]
    fn unknown_tokens_are_kept_and_deduplicated() {
        assert_eq!(
            compose(["terminal terminal-container", "terminal fixed"]),
            "terminal-container terminal fixed"
        );
    }

    #[test]
    fn caller_override_wins_over_recipe_padding() {
        let base = "inline-flex items-center rounded-md px-4 py-2 text-base";
        assert_eq!(
            compose([base, "px-8 rounded-full"]),
            "inline-flex items-center py-2 text-base px-8 rounded-full"
        );
    }

    #[test]
    fn composing_output_again_is_stable() {
        let once = compose([
            "relative p-4 rounded-lg border flex items-start gap-3",
            "bg-red-900/20 border-red-500/50 text-red-400",
            "p-6 border-2",
        ]);
        assert_eq!(compose([once.as_str()]), once);
    }

    #[test]
    fn whitespace_variants_are_normalized() {
        assert_eq!(
            compose(["  flex\n\titems-center  ", " gap-2 "]),
            "flex items-center gap-2"
        );
    }

    #[test]
    fn fragment_emptiness_accounts_for_nested_groups() {
        assert!(ClassFragment::Group(vec![ClassFragment::Absent, " ".into()]).is_empty());
        assert!(!ClassFragment::from(vec!["", "flex"]).is_empty());
    }
}
