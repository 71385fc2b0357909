// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Formatting and validation rules from the style guide.

pub mod dates;
pub mod slugs;
