#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime label types shared across the crime sample toolchain.
//!
//! The Chicago portal reports a free-form `primary_type` label per incident
//! (e.g. `"BATTERY"`, `"THEFT"`). This crate defines the closed set of labels
//! that are treated as violent crime.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A `primary_type` label that counts as a violent crime.
///
/// Parsing is an exact, case-sensitive match against the portal's
/// `SCREAMING_SNAKE_CASE` label, so `"battery"` is not violent but
/// `"BATTERY"` is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolentCrimeType {
    /// Threat or attempt of bodily harm
    Assault,
    /// Unlawful physical contact causing harm
    Battery,
    /// Killing of one person by another
    Homicide,
    /// Taking property by force or threat
    Robbery,
}

impl ViolentCrimeType {
    /// Looks up the violent type for a raw `primary_type` label.
    ///
    /// Returns `None` for any label outside the set, including labels that
    /// differ only in case or surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}
