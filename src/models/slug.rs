// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Slug value object pairing a packaging slug with an optional wild slug.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logic::slugs::validate_slug;
use crate::models::ValidationError;

/// An editorial slug such as `FERRARI-RESULTS/PROSPECTUS`.
///
/// Construction does not validate; call [`Slug::validate`] or build through
/// [`Slug::parse`]. Two slugs are equal when their full forms are equal, so
/// `("AB-CD/", "EF")` and `("AB-CD/E", "F")` compare equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Slug {
    packaging_slug: String,
    wild_slug: String,
}

impl Slug {
    pub fn new(packaging_slug: impl Into<String>, wild_slug: impl Into<String>) -> Self {
        Self {
            packaging_slug: packaging_slug.into(),
            wild_slug: wild_slug.into(),
        }
    }

    /// Validate a full slug and split it after its slash.
    ///
    /// # Errors
    ///
    /// Returns the first rule `full` breaks.
    pub fn parse(full: &str) -> Result<Self, ValidationError> {
        validate_slug(full)?;
        // Validation guarantees exactly one slash.
        let split = full.find('/').map_or(full.len(), |pos| pos + 1);
        let (packaging, wild) = full.split_at(split);
        Ok(Self::new(packaging, wild))
    }

    pub fn packaging_slug(&self) -> &str {
        &self.packaging_slug
    }

    pub fn wild_slug(&self) -> &str {
        &self.wild_slug
    }

    /// Packaging and wild slug joined together.
    pub fn full_slug(&self) -> String {
        format!("{}{}", self.packaging_slug, self.wild_slug)
    }

    /// Check the full slug against the style guide rules.
    pub fn validate(&self) -> Result<bool, ValidationError> {
        validate_slug(&self.full_slug())
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.packaging_slug, self.wild_slug)
    }
}

impl PartialEq for Slug {
    fn eq(&self, other: &Self) -> bool {
        self.full_slug() == other.full_slug()
    }
}

impl Eq for Slug {}

impl Hash for Slug {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_slug().hash(state);
    }
}

impl FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Slug;
    use crate::models::{SlugKind, ValidationError};

    #[test]
    fn slug_joins_parts() {
        let slug = Slug::new("FERRARI-RESULTS/", "PROSPECTUS");
        assert_eq!(slug.packaging_slug(), "FERRARI-RESULTS/");
        assert_eq!(slug.wild_slug(), "PROSPECTUS");
        assert_eq!(slug.to_string(), "FERRARI-RESULTS/PROSPECTUS");
        assert_eq!(slug.full_slug(), "FERRARI-RESULTS/PROSPECTUS");
        assert_eq!(slug.validate(), Ok(true));
    }

    // Bad parts are accepted at construction and rejected by validate().
    #[test]
    fn invalid_slug_fails_validation() {
        let slug = Slug::new("FERRARI-RESULssss ", "PROSPECTUS");
        assert_eq!(
            slug.validate(),
            Err(ValidationError::MultipleSlashes(SlugKind::Full))
        );
        assert_ne!(slug, Slug::new("FERRARI-RESULTS/", "PROSPECTUS"));
        assert_eq!(slug, slug.clone());
    }

    // Equality and hashing follow the joined form, not the split point.
    #[test]
    fn equality_uses_full_slug() {
        let a = Slug::new("AB-CD/", "EF");
        let b = Slug::new("AB-CD/E", "F");
        assert_eq!(a, b);

        let set: HashSet<Slug> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn parse_splits_after_slash() {
        let slug: Slug = "FERRARI-IPO/PROSPECTUS".parse().unwrap();
        assert_eq!(slug.packaging_slug(), "FERRARI-IPO/");
        assert_eq!(slug.wild_slug(), "PROSPECTUS");

        let bare = Slug::parse("FERRARI-IPO/").unwrap();
        assert_eq!(bare.wild_slug(), "");
    }

    #[test]
    fn parse_rejects_invalid_slug() {
        assert_eq!(
            Slug::parse("FERRARI-IPO/PROSPECTUS-PROSPECTUS"),
            Err(ValidationError::DuplicateTerm(SlugKind::Wild))
        );
    }

    #[test]
    fn slug_deserializes_from_named_fields() {
        let slug: Slug = serde_json::from_str(
            r#"{"packaging_slug":"FERRARI-IPO/","wild_slug":"PROSPECTUS"}"#,
        )
        .unwrap();
        assert_eq!(slug.full_slug(), "FERRARI-IPO/PROSPECTUS");
    }
}
