//! Attribute forwarding filter.
//!
//! Components accept arbitrary attributes and forward them to the native element they render.
//! Before forwarding, [`Denylist::filter`] removes keys that configure the component itself
//! (`variant`, `size`, `isLoading`, ...), keys using a reserved sigil, and keys with characters
//! that indicate a malformed dynamic key. Everything else, including any `aria-*` or `data-*`
//! attribute, passes through untouched.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use indexmap::IndexMap;

/// Ordered mapping of a component's declared properties.
pub type PropertyBag<V = serde_json::Value> = IndexMap<String, V>;

/// Key prefixes reserved for internal/private use.
pub const RESERVED_SIGILS: &[char] = &['$', '_'];

/// Characters that mark a key as malformed dynamic output.
pub const UNSAFE_KEY_CHARS: &[char] = &['%', '{', '}'];

/// Framework-agnostic metadata namespaces. Informational: these keys are forwarded because
/// nothing denies them, not because they are allow-listed.
pub const PASS_THROUGH_PREFIXES: &[&str] = &["aria-", "data-"];

/// Internal configuration keys never forwarded to a native element.
pub const STANDARD_DENYLIST: &[&str] = &[
    "variant",
    "size",
    "isLoading",
    "leftIcon",
    "rightIcon",
    "invalid",
    "as",
    "orientation",
    "step",
    "currentStep",
    "totalSteps",
    "label",
    "showLine",
    "status",
    "flipped",
    "frontContent",
    "backContent",
    "onFlip",
    "withGradient",
    "icon",
    "hideIcon",
    "title",
    "required",
    "hint",
    "error",
    "steps",
];

/// Outcome of checking one key against a [`Denylist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Ordinary attribute; forwarded.
    Forward,
    /// `aria-*` / `data-*` attribute; forwarded.
    PassThrough,
    /// Starts with a reserved sigil; dropped.
    Reserved,
    /// Contains an unsafe character; dropped.
    Unsafe,
    /// Member of the denylist; dropped.
    Denied,
}

impl KeyDisposition {
    /// Returns `true` when the key reaches the rendering target.
    pub fn is_forwarded(self) -> bool {
        matches!(self, Self::Forward | Self::PassThrough)
    }

    /// Stable disposition token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::PassThrough => "pass-through",
            Self::Reserved => "reserved",
            Self::Unsafe => "unsafe",
            Self::Denied => "denied",
        }
    }
}

/// Immutable set of internal-only keys.
///
/// Keys are stored in lowerCamel form; kebab-case and snake_case spellings of a denied key are
/// denied as well (`show-line`, `show_line` and `showLine` are the same key). This is wider than
/// exact-key membership: an attribute literally named `show-line` or `current_step` is dropped
/// even though only `showLine` and `currentStep` are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    keys: BTreeSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl Denylist {
    /// Process-wide standard denylist, built on first use.
    pub fn standard() -> &'static Denylist {
        static STANDARD: OnceLock<Denylist> = OnceLock::new();
        STANDARD.get_or_init(|| DenylistBuilder::standard().build())
    }

    /// Denylist without any keys; only the sigil and character rules apply.
    pub fn empty() -> Self {
        DenylistBuilder::empty().build()
    }

    /// Builder seeded with [`STANDARD_DENYLIST`].
    pub fn builder() -> DenylistBuilder {
        DenylistBuilder::standard()
    }

    /// Iterates denied keys in lowerCamel form, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of denied keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no key is denied by name.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` when `key` is denied by name.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key) || self.keys.contains(&lower_camel(key))
    }

    /// Classifies `key`. Rules are checked in order: reserved sigil, unsafe characters,
    /// denylist membership.
    pub fn disposition(&self, key: &str) -> KeyDisposition {
        if key.starts_with(RESERVED_SIGILS) {
            KeyDisposition::Reserved
        } else if key.contains(UNSAFE_KEY_CHARS) {
            KeyDisposition::Unsafe
        } else if self.contains(key) {
            KeyDisposition::Denied
        } else if PASS_THROUGH_PREFIXES
            .iter()
            .any(|prefix| key.starts_with(prefix))
        {
            KeyDisposition::PassThrough
        } else {
            KeyDisposition::Forward
        }
    }

    /// Returns `true` when `key` may be forwarded.
    pub fn permits(&self, key: &str) -> bool {
        self.disposition(key).is_forwarded()
    }

    /// Returns a copy of `props` holding only forwardable keys, in input order.
    pub fn filter<V: Clone>(&self, props: &PropertyBag<V>) -> PropertyBag<V> {
        props
            .iter()
            .filter(|(key, _)| self.permits(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Keeps the forwardable pairs of an arbitrary `(key, value)` sequence.
    pub fn retain_forwardable<'d, I, K, V>(&'d self, pairs: I) -> impl Iterator<Item = (K, V)> + 'd
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'd,
        K: AsRef<str>,
    {
        pairs
            .into_iter()
            .filter(move |(key, _)| self.permits(key.as_ref()))
    }
}

/// Builder for a custom [`Denylist`]; the list is frozen by [`DenylistBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct DenylistBuilder {
    keys: BTreeSet<String>,
}

impl DenylistBuilder {
    /// Starts from [`STANDARD_DENYLIST`].
    pub fn standard() -> Self {
        Self::empty().deny_all(STANDARD_DENYLIST.iter().copied())
    }

    /// Starts from an empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Denies `key`.
    pub fn deny(mut self, key: impl AsRef<str>) -> Self {
        self.keys.insert(lower_camel(key.as_ref()));
        self
    }

    /// Denies every key in `keys`.
    pub fn deny_all<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter().fold(self, Self::deny)
    }

    /// Releases `key` so it is forwarded again.
    pub fn allow(mut self, key: impl AsRef<str>) -> Self {
        self.keys.remove(&lower_camel(key.as_ref()));
        self
    }

    /// Releases every key in `keys`.
    pub fn allow_all<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter().fold(self, Self::allow)
    }

    /// Freezes the list.
    pub fn build(self) -> Denylist {
        Denylist { keys: self.keys }
    }
}

/// Filters `props` with the standard denylist.
pub fn filter_forward<V: Clone>(props: &PropertyBag<V>) -> PropertyBag<V> {
    Denylist::standard().filter(props)
}

/// Filters `props` with a caller-supplied denylist.
pub fn filter_forward_with<V: Clone>(props: &PropertyBag<V>, denylist: &Denylist) -> PropertyBag<V> {
    denylist.filter(props)
}

/// `show-line` and `show_line` become `showLine`; other keys are returned unchanged.
fn lower_camel(key: &str) -> String {
    if !key.contains(['-', '_']) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    for (index, segment) in key.split(['-', '_']).enumerate() {
        if index == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn bag(pairs: &[(&str, Value)]) -> PropertyBag {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn keys(props: &PropertyBag) -> Vec<&str> {
        props.keys().map(String::as_str).collect()
    }

    #[test]
    fn forwards_pass_through_attributes_and_drops_internal_keys() {
        let props = bag(&[
            ("variant", json!("primary")),
            ("data-testid", json!("x")),
            ("aria-label", json!("y")),
            ("$internal", json!(1)),
            ("a%b", json!(2)),
        ]);

        let filtered = filter_forward(&props);
        assert_eq!(keys(&filtered), vec!["data-testid", "aria-label"]);
        assert_eq!(filtered["data-testid"], json!("x"));
        assert_eq!(filtered["aria-label"], json!("y"));
    }

    #[test]
    fn empty_bag_filters_to_empty_bag() {
        assert!(filter_forward(&PropertyBag::<Value>::new()).is_empty());
    }

    #[test]
    fn input_is_not_mutated_and_order_is_preserved() {
        let props = bag(&[
            ("type", json!("button")),
            ("isLoading", json!(true)),
            ("id", json!("submit")),
            ("onClick", json!(null)),
        ]);
        let snapshot = props.clone();

        let filtered = filter_forward(&props);
        assert_eq!(props, snapshot);
        assert_eq!(keys(&filtered), vec!["type", "id", "onClick"]);
    }

    #[test]
    fn every_rule_applies_independently() {
        let denylist = Denylist::standard();
        assert_eq!(denylist.disposition("_private"), KeyDisposition::Reserved);
        assert_eq!(denylist.disposition("$variant"), KeyDisposition::Reserved);
        assert_eq!(denylist.disposition("style{0}"), KeyDisposition::Unsafe);
        assert_eq!(denylist.disposition("50%"), KeyDisposition::Unsafe);
        assert_eq!(denylist.disposition("withGradient"), KeyDisposition::Denied);
        assert_eq!(denylist.disposition("data-state"), KeyDisposition::PassThrough);
        assert_eq!(denylist.disposition("placeholder"), KeyDisposition::Forward);
    }

    #[test]
    fn kebab_and_snake_spellings_of_denied_keys_are_denied() {
        let denylist = Denylist::standard();
        for key in ["show-line", "show_line", "is-loading", "current_step", "hide-icon"] {
            assert_eq!(denylist.disposition(key), KeyDisposition::Denied, "{key}");
        }
        assert!(denylist.permits("data-variant"));
        assert!(denylist.permits("aria-current"));
    }

    #[test]
    fn empty_and_spaced_keys_are_forwarded() {
        let props = bag(&[
            ("", json!(1)),
            ("on click", json!(2)),
            ("show-line", json!(3)),
            ("id", json!(4)),
        ]);
        let filtered = filter_forward(&props);
        assert_eq!(keys(&filtered), vec!["", "on click", "id"]);
        assert_eq!(Denylist::standard().disposition(""), KeyDisposition::Forward);
    }

    #[test]
    fn pass_through_prefix_does_not_override_unsafe_characters() {
        let denylist = Denylist::standard();
        assert_eq!(denylist.disposition("data-{id}"), KeyDisposition::Unsafe);
    }

    #[test]
    fn builder_can_extend_and_release_standard_keys() {
        let denylist = Denylist::builder()
            .deny("tooltip")
            .deny("elevation-level")
            .allow("title")
            .build();

        assert!(!denylist.permits("tooltip"));
        assert!(!denylist.permits("elevationLevel"));
        assert!(denylist.permits("title"));
        assert!(!denylist.permits("variant"));
        assert_eq!(Denylist::standard().len(), STANDARD_DENYLIST.len());
        assert!(!Denylist::standard().permits("title"));
    }

    #[test]
    fn empty_denylist_still_applies_character_rules() {
        let denylist = Denylist::empty();
        assert!(denylist.is_empty());
        assert!(denylist.permits("variant"));
        assert!(!denylist.permits("_variant"));
        assert!(!denylist.permits("a}b"));
    }

    #[test]
    fn retain_forwardable_filters_borrowed_pairs() {
        let pairs = vec![("size", 1), ("role", 2), ("aria-hidden", 3), ("__key", 4)];
        let kept: Vec<_> = Denylist::standard().retain_forwardable(pairs).collect();
        assert_eq!(kept, vec![("role", 2), ("aria-hidden", 3)]);
    }

    #[test]
    fn custom_denylist_is_used_by_filter_forward_with() {
        let props = bag(&[("title", json!("Docs")), ("tooltip", json!("hi"))]);
        let denylist = DenylistBuilder::empty().deny("tooltip").build();
        let filtered = filter_forward_with(&props, &denylist);
        assert_eq!(keys(&filtered), vec!["title"]);
    }

    #[test]
    fn lower_camel_joins_kebab_and_snake_segments() {
        assert_eq!(lower_camel("show-line"), "showLine");
        assert_eq!(lower_camel("total_steps"), "totalSteps");
        assert_eq!(lower_camel("variant"), "variant");
        assert_eq!(lower_camel("aria-label"), "ariaLabel");
    }
}
