// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Slug syntax validation.
//!
//! A full slug is a packaging slug followed by an optional wild slug, as in
//! `FERRARI-IPO/PROSPECTUS`. Every validator runs its rules in a fixed order
//! and reports only the first one that fails.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::{SlugKind, ValidationError};

/// Longest slug of any kind, in characters.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Most hyphen-separated terms a packaging or wild slug may carry.
pub const MAX_TERMS: usize = 5;

const MIN_TERM_LENGTH: usize = 2;

/// Validate a full slug such as `FERRARI-IPO/PROSPECTUS` or `FERRARI-IPO/`.
///
/// # Errors
///
/// Returns the first rule the slug breaks. Failures inside the packaging or
/// wild part are reported against that part.
pub fn validate_slug(slug: &str) -> Result<bool, ValidationError> {
    logged(check_full(slug))
}

/// Validate a packaging slug such as `FERRARI-IPO/`.
///
/// # Errors
///
/// Returns the first rule the slug breaks.
pub fn validate_packaging_slug(slug: &str) -> Result<bool, ValidationError> {
    logged(check_packaging(slug))
}

/// Validate a wild slug such as `PROSPECTUS`.
///
/// # Errors
///
/// Returns the first rule the slug breaks.
pub fn validate_wild_slug(slug: &str) -> Result<bool, ValidationError> {
    logged(check_wild(slug))
}

/// Validate a full slug taken from untyped input; non-strings are rejected.
pub fn validate_slug_value(value: &Value) -> Result<bool, ValidationError> {
    SlugKind::Full.validate_value(value)
}

/// Validate a packaging slug taken from untyped input; non-strings are rejected.
pub fn validate_packaging_slug_value(value: &Value) -> Result<bool, ValidationError> {
    SlugKind::Packaging.validate_value(value)
}

/// Validate a wild slug taken from untyped input; non-strings are rejected.
pub fn validate_wild_slug_value(value: &Value) -> Result<bool, ValidationError> {
    SlugKind::Wild.validate_value(value)
}

impl SlugKind {
    /// Run the validator for this kind of slug.
    pub fn validate(&self, slug: &str) -> Result<bool, ValidationError> {
        match self {
            SlugKind::Full => validate_slug(slug),
            SlugKind::Packaging => validate_packaging_slug(slug),
            SlugKind::Wild => validate_wild_slug(slug),
        }
    }

    /// Like [`SlugKind::validate`], for a JSON value that may not be a string.
    pub fn validate_value(&self, value: &Value) -> Result<bool, ValidationError> {
        match value {
            Value::String(slug) => self.validate(slug),
            _ => logged(Err(ValidationError::NotAString(*self))),
        }
    }
}

fn logged(result: Result<(), ValidationError>) -> Result<bool, ValidationError> {
    match result {
        Ok(()) => Ok(true),
        Err(err) => {
            tracing::debug!(kind = %err.kind(), reason = %err, "slug rejected");
            Err(err)
        }
    }
}

fn check_full(slug: &str) -> Result<(), ValidationError> {
    let kind = SlugKind::Full;
    check_length(slug, kind)?;

    let Some((packaging, wild)) = slug.split_once('/') else {
        return Err(ValidationError::MultipleSlashes(kind));
    };
    if wild.contains('/') {
        return Err(ValidationError::MultipleSlashes(kind));
    }

    check_packaging(&format!("{packaging}/"))?;
    if !wild.is_empty() {
        check_wild(wild)?;
    }
    Ok(())
}

fn check_packaging(slug: &str) -> Result<(), ValidationError> {
    let kind = SlugKind::Packaging;
    check_length(slug, kind)?;
    check_uppercase(slug, kind)?;

    if !slug.ends_with('/') {
        return Err(ValidationError::MissingTrailingSlash(kind));
    }
    if slug.matches('/').count() != 1 {
        return Err(ValidationError::MultipleSlashes(kind));
    }

    let prefix = slug.trim_end_matches('/');
    let terms: Vec<&str> = prefix.split('-').collect();
    if !(2..=MAX_TERMS).contains(&terms.len()) {
        return Err(ValidationError::TermCount(kind));
    }
    check_terms(&terms, kind)
}

fn check_wild(slug: &str) -> Result<(), ValidationError> {
    let kind = SlugKind::Wild;
    check_length(slug, kind)?;
    check_uppercase(slug, kind)?;

    if slug.contains('/') {
        return Err(ValidationError::ContainsSlash(kind));
    }

    let terms: Vec<&str> = slug.split('-').collect();
    if terms.len() > MAX_TERMS {
        return Err(ValidationError::TermCount(kind));
    }
    check_terms(&terms, kind)
}

/// Non-empty and at most [`MAX_SLUG_LENGTH`] characters.
fn check_length(slug: &str, kind: SlugKind) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::Empty(kind));
    }
    if slug.chars().count() > MAX_SLUG_LENGTH {
        return Err(ValidationError::TooLong(kind));
    }
    Ok(())
}

/// No lowercase letters and no whitespace.
fn check_uppercase(slug: &str, kind: SlugKind) -> Result<(), ValidationError> {
    if slug.chars().any(char::is_whitespace) || slug.to_uppercase() != slug {
        return Err(ValidationError::NotUppercase(kind));
    }
    Ok(())
}

/// Length, character set and uniqueness of each term, in that order.
fn check_terms(terms: &[&str], kind: SlugKind) -> Result<(), ValidationError> {
    if terms.iter().any(|t| t.chars().count() < MIN_TERM_LENGTH) {
        return Err(ValidationError::ShortTerm(kind));
    }
    if !terms.iter().all(|t| t.chars().all(char::is_alphanumeric)) {
        return Err(ValidationError::NonAlphanumericTerm(kind));
    }
    let mut seen = HashSet::new();
    if !terms.iter().all(|t| seen.insert(*t)) {
        return Err(ValidationError::DuplicateTerm(kind));
    }
    Ok(())
}
