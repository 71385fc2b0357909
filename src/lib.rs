// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Format dates, times and slugs to conform with the Reuters Style Guide.
//!
//! Everything here is a pure function of its input: no I/O, no shared state.

pub mod logic;
pub mod models;
pub mod utils;

pub use logic::dates::{format_date, format_dayofweek, format_time};
pub use logic::slugs::{
    MAX_SLUG_LENGTH, MAX_TERMS, validate_packaging_slug, validate_packaging_slug_value,
    validate_slug, validate_slug_value, validate_wild_slug, validate_wild_slug_value,
};
pub use models::{Moment, MomentError, Ric, Slug, SlugKind, ValidationError};
pub use utils::suggest_wild_slug;
