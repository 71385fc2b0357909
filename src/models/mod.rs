// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: value objects, timestamp input and error types.

pub mod error;
pub mod moment;
pub mod ric;
pub mod slug;

pub use error::{MomentError, SlugKind, ValidationError};
pub use moment::Moment;
pub use ric::Ric;
pub use slug::Slug;
