// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breakpoints --heading-base-level=0

//! Understory Breakpoints: Tailwind-style width breakpoints.
//!
//! This crate maps a measured width onto one of six ordered tiers and picks
//! the most specific value supplied for that tier. It focuses on:
//! - Classification of a width into a [`Breakpoint`] against a
//!   [`BreakpointTable`] (Tailwind's defaults, or your own thresholds).
//! - Resolution of a [`Responsive`] value set: an always-present `initial`
//!   value plus optional overrides for `sm` through `xxl`.
//! - Tier sets ([`BreakpointSet`]) for "only on these screens" predicates.
//!
//! It does **not** measure anything or own any widgets. Callers are
//! expected to:
//! - Query their window, viewport, or container width and pass it in
//!   directly or through a [`WidthSource`].
//! - Re-resolve when that width changes.
//!
//! ## Tiers
//!
//! | Tier      | Minimum width |
//! |-----------|---------------|
//! | `initial` | (none)        |
//! | `sm`      | 640           |
//! | `md`      | 768           |
//! | `lg`      | 1024          |
//! | `xl`      | 1280          |
//! | `xxl`     | 1536          |
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_breakpoints::{Breakpoint, classify, resolve};
//!
//! assert_eq!(classify(639.999), Breakpoint::Initial);
//! assert_eq!(classify(640.0), Breakpoint::Sm);
//! assert_eq!(classify(1536.0), Breakpoint::Xxl);
//!
//! // Padding: 8 on phones, 16 from `sm` upward, 32 from `xl` upward.
//! let padding = |width| resolve(width, 8.0, Some(16.0), None, None, Some(32.0), None);
//! assert_eq!(padding(320.0), 8.0);
//! assert_eq!(padding(1024.0), 16.0);
//! assert_eq!(padding(2000.0), 32.0);
//! ```
//!
//! ## Fallback
//!
//! Resolution scans from the widest tier to the narrowest and returns the
//! first value that is set for a tier the width meets. A value set for a
//! narrow tier therefore carries up through every wider tier that is left
//! unset, exactly like a Tailwind `sm:` utility without an `xl:` override.
//! This is not an exact-tier lookup: `sm` applies at 2000 unless `md`..`xxl`
//! say otherwise.
//!
//! ## Non-finite widths
//!
//! `NaN` and `-inf` classify and resolve as [`Breakpoint::Initial`];
//! `+inf` classifies as [`Breakpoint::Xxl`].
//!
//! ## Features
//!
//! - `std` (default): forwards to optional dependencies.
//! - `serde`: (de)serialization for [`Breakpoint`], [`BreakpointSet`],
//!   [`Responsive`] and [`BreakpointTable`]. Tables deserialize from
//!   `{"sm": .., "md": .., "lg": .., "xl": .., "xxl": ..}` and are validated.
//! - `kurbo`: [`WidthSource`] for `kurbo::Size` and `kurbo::Rect`.
//! - `tracing`: `debug`/`trace` events for table validation and resolution.
//!
//! This crate is `no_std`.

#![no_std]

#[macro_use]
mod diagnostics;

mod breakpoint;
mod display;
mod responsive;
mod set;
mod source;
mod table;

pub use breakpoint::{Breakpoint, ParseBreakpointError};
pub use display::{select_display_element, select_display_element_with};
pub use responsive::Responsive;
pub use set::BreakpointSet;
pub use source::{FromFn, WidthSource, width_from_fn};
pub use table::{BreakpointTable, TableError, Thresholds};

/// Classifies `width` against [`BreakpointTable::TAILWIND`].
///
/// See [`BreakpointTable::classify`].
#[must_use]
pub fn classify(width: f64) -> Breakpoint {
    BreakpointTable::TAILWIND.classify(width)
}

/// Resolves a value for `width` against [`BreakpointTable::TAILWIND`].
///
/// `initial` is required; each wider tier is optional. The widest supplied
/// tier that `width` meets wins, otherwise `initial` is returned.
#[must_use]
pub fn resolve<T>(
    width: f64,
    initial: T,
    sm: Option<T>,
    md: Option<T>,
    lg: Option<T>,
    xl: Option<T>,
    xxl: Option<T>,
) -> T {
    let mut values = Responsive::new(initial);
    for (tier, value) in Breakpoint::THRESHOLDED.into_iter().zip([sm, md, lg, xl, xxl]) {
        values.set(tier, value);
    }
    values.into_resolved(width)
}
