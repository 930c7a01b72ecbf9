// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Title hits outweigh body hits, a whole-phrase hit outweighs any single
//! term, and fresh content gets a small nudge once it already matches.
//! Ranking is a plain stable sort on the resulting score.

mod core;
pub mod ranking;

pub use self::core::*;
