// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities built on top of the validators.

pub mod suggest;

/// Suggest a wild slug for free text.
pub use suggest::suggest_wild_slug;
