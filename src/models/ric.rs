// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Refinitiv Instrument Code paired with its display title.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A RIC such as `AAPL.O` with a human-readable title. No validation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ric {
    pub code: String,
    pub title: String,
}

impl Ric {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }
}

/// Prints the code only.
impl fmt::Display for Ric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
