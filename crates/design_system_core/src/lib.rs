//! Runtime-agnostic core of the design system.
//!
//! The crate owns the two utilities every presentational component is built on:
//!
//! - [`compose`] merges ordered class-name fragments into one conflict-resolved class string.
//! - [`filter_forward`] strips internal styling/state keys from a [`PropertyBag`] before the
//!   remaining attributes reach a native element.
//!
//! On top of those it provides typed variant recipes for each component and a TOML-backed
//! [`DesignSystemConfig`]. Nothing here depends on Leptos or browser APIs; the
//! `design_system_ui` crate renders these recipes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod attributes;
mod class_groups;
pub mod class_names;
pub mod config;
pub mod error;
pub mod recipes;
pub mod variants;

pub use attributes::{
    filter_forward, filter_forward_with, Denylist, DenylistBuilder, KeyDisposition, PropertyBag,
    PASS_THROUGH_PREFIXES, RESERVED_SIGILS, STANDARD_DENYLIST, UNSAFE_KEY_CHARS,
};
pub use class_names::{compose, ClassComposer, ClassFragment, MergePolicy};
pub use config::{AttributeConfig, ClassConfig, DesignSystemConfig};
pub use error::ConfigError;
pub use variants::{CompoundVariant, Recipe, Selection, VariantAxis, VariantRecipe};

/// Convenience imports for crates rendering the design system.
pub mod prelude {
    pub use crate::recipes::*;
    pub use crate::{
        cn, compose, filter_forward, ClassComposer, ClassFragment, Denylist, DesignSystemConfig,
        KeyDisposition, MergePolicy, PropertyBag, Recipe, Selection, VariantAxis, VariantRecipe,
    };
}
