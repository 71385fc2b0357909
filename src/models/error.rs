// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error types for slug validation and timestamp conversion.

use std::fmt;

use thiserror::Error;

/// The three slug shapes the style guide distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlugKind {
    /// `PACKAGING-SLUG/WILD-SLUG`
    Full,
    /// `PACKAGING-SLUG/`
    Packaging,
    /// `WILD-SLUG`
    Wild,
}

impl SlugKind {
    /// Subject used at the start of every failure message.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlugKind::Full => "Full slug",
            SlugKind::Packaging => "Packaging slug",
            SlugKind::Wild => "Wild slug",
        }
    }

    /// Smallest number of hyphen-separated terms, spelled out for messages.
    fn min_terms_word(&self) -> &'static str {
        match self {
            SlugKind::Packaging => "two",
            SlugKind::Full | SlugKind::Wild => "one",
        }
    }
}

impl fmt::Display for SlugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slug broke one of the style guide rules.
///
/// Only the first violated rule is ever reported. The `Display` form is the
/// complete user-facing message, e.g.
/// `"Wild slug terms cannot be duplicated."`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be a string.")]
    NotAString(SlugKind),
    #[error("{0} cannot be empty.")]
    Empty(SlugKind),
    #[error("{0} cannot be longer than 64 characters.")]
    TooLong(SlugKind),
    #[error("{0} can only contain uppercase letters, hyphens and slashes.")]
    NotUppercase(SlugKind),
    #[error("{0} cannot contain a slash.")]
    ContainsSlash(SlugKind),
    #[error("{0} must end with a slash.")]
    MissingTrailingSlash(SlugKind),
    #[error("{0} can only contain one slash.")]
    MultipleSlashes(SlugKind),
    #[error("{0} must contain {min} to five terms separated by hyphens.", min = .0.min_terms_word())]
    TermCount(SlugKind),
    #[error("{0} terms must be at least two characters long.")]
    ShortTerm(SlugKind),
    #[error("{0} terms can only be alphanumeric.")]
    NonAlphanumericTerm(SlugKind),
    #[error("{0} terms cannot be duplicated.")]
    DuplicateTerm(SlugKind),
}

impl ValidationError {
    /// Which slug shape the failing rule belongs to.
    pub fn kind(&self) -> SlugKind {
        match *self {
            ValidationError::NotAString(kind)
            | ValidationError::Empty(kind)
            | ValidationError::TooLong(kind)
            | ValidationError::NotUppercase(kind)
            | ValidationError::ContainsSlash(kind)
            | ValidationError::MissingTrailingSlash(kind)
            | ValidationError::MultipleSlashes(kind)
            | ValidationError::TermCount(kind)
            | ValidationError::ShortTerm(kind)
            | ValidationError::NonAlphanumericTerm(kind)
            | ValidationError::DuplicateTerm(kind) => kind,
        }
    }
}

/// A date/time value from another crate could not be represented as a [`crate::Moment`].
#[derive(Debug, Error)]
pub enum MomentError {
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),
    #[error(transparent)]
    Jiff(#[from] jiff::Error),
}
