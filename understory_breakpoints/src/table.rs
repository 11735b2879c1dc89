// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered width thresholds and the classify/resolve scans over them.

use core::fmt;
use core::ops::Range;

use crate::{Breakpoint, Responsive, WidthSource};

/// Error returned when a set of thresholds cannot form a [`BreakpointTable`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TableError {
    /// The threshold is NaN or infinite.
    NotFinite {
        /// The tier carrying the threshold.
        tier: Breakpoint,
        /// The rejected threshold.
        value: f64,
    },
    /// The threshold is below zero.
    Negative {
        /// The tier carrying the threshold.
        tier: Breakpoint,
        /// The rejected threshold.
        value: f64,
    },
    /// The threshold is not strictly greater than the next narrower tier's.
    NotIncreasing {
        /// The tier carrying the threshold.
        tier: Breakpoint,
        /// The rejected threshold.
        value: f64,
        /// The threshold of the next narrower tier.
        previous: f64,
    },
}

impl TableError {
    /// The tier whose threshold was rejected.
    #[must_use]
    pub fn tier(&self) -> Breakpoint {
        match *self {
            Self::NotFinite { tier, .. }
            | Self::Negative { tier, .. }
            | Self::NotIncreasing { tier, .. } => tier,
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NotFinite { tier, value } => {
                write!(f, "threshold for `{tier}` must be finite, got {value}")
            }
            Self::Negative { tier, value } => {
                write!(f, "threshold for `{tier}` must not be negative, got {value}")
            }
            Self::NotIncreasing {
                tier,
                value,
                previous,
            } => write!(
                f,
                "threshold for `{tier}` ({value}) must be greater than the previous tier's ({previous})"
            ),
        }
    }
}

impl core::error::Error for TableError {}

/// Plain, unvalidated minimum widths for the five thresholded tiers.
///
/// This is the configuration shape of a [`BreakpointTable`]; convert it with
/// [`BreakpointTable::from_thresholds`] (or `TryFrom`) to validate it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Thresholds {
    /// Minimum width of [`Breakpoint::Sm`].
    pub sm: f64,
    /// Minimum width of [`Breakpoint::Md`].
    pub md: f64,
    /// Minimum width of [`Breakpoint::Lg`].
    pub lg: f64,
    /// Minimum width of [`Breakpoint::Xl`].
    pub xl: f64,
    /// Minimum width of [`Breakpoint::Xxl`].
    #[cfg_attr(feature = "serde", serde(alias = "2xl"))]
    pub xxl: f64,
}

impl Thresholds {
    /// The thresholds as an array, narrowest tier first.
    #[must_use]
    pub const fn to_array(self) -> [f64; 5] {
        [self.sm, self.md, self.lg, self.xl, self.xxl]
    }
}

impl From<[f64; 5]> for Thresholds {
    fn from([sm, md, lg, xl, xxl]: [f64; 5]) -> Self {
        Self { sm, md, lg, xl, xxl }
    }
}

/// An immutable, strictly increasing table of `(tier, minimum width)` pairs.
///
/// Only [`Breakpoint::Sm`] through [`Breakpoint::Xxl`] have entries;
/// [`Breakpoint::Initial`] is implied below the first one. Widths are in
/// whatever unit the caller measures in (typically logical pixels).
///
/// ```rust
/// use understory_breakpoints::{Breakpoint, BreakpointTable};
///
/// let table = BreakpointTable::TAILWIND;
/// assert_eq!(table.classify(639.0), Breakpoint::Initial);
/// assert_eq!(table.classify(640.0), Breakpoint::Sm);
/// assert_eq!(table.classify(2000.0), Breakpoint::Xxl);
///
/// // Bootstrap-like thresholds for a different design system.
/// let bootstrap = BreakpointTable::new([576.0, 768.0, 992.0, 1200.0, 1400.0]).unwrap();
/// assert_eq!(bootstrap.classify(1000.0), Breakpoint::Lg);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Thresholds", into = "Thresholds")
)]
pub struct BreakpointTable {
    entries: [(Breakpoint, f64); 5],
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::TAILWIND
    }
}

impl BreakpointTable {
    /// Tailwind CSS default screens: `sm` 640, `md` 768, `lg` 1024, `xl` 1280,
    /// `2xl` 1536.
    pub const TAILWIND: Self = Self {
        entries: [
            (Breakpoint::Sm, 640.0),
            (Breakpoint::Md, 768.0),
            (Breakpoint::Lg, 1024.0),
            (Breakpoint::Xl, 1280.0),
            (Breakpoint::Xxl, 1536.0),
        ],
    };

    /// Builds a table from minimum widths for `sm`, `md`, `lg`, `xl`, `xxl`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if any threshold is non-finite or negative, or
    /// if the thresholds are not strictly increasing.
    pub fn new(thresholds: [f64; 5]) -> Result<Self, TableError> {
        let mut entries = Self::TAILWIND.entries;
        let mut previous: Option<f64> = None;
        for (entry, value) in entries.iter_mut().zip(thresholds) {
            let tier = entry.0;
            if let Err(err) = check_threshold(tier, value, previous) {
                debug_event!(tier = %err.tier(), %err, "rejected breakpoint table");
                return Err(err);
            }
            entry.1 = value;
            previous = Some(value);
        }
        Ok(Self { entries })
    }

    /// Builds a table from named [`Thresholds`].
    ///
    /// # Errors
    ///
    /// See [`BreakpointTable::new`].
    pub fn from_thresholds(thresholds: Thresholds) -> Result<Self, TableError> {
        Self::new(thresholds.to_array())
    }

    /// The `(tier, minimum width)` entries, narrowest first.
    #[must_use]
    pub fn entries(&self) -> &[(Breakpoint, f64)] {
        &self.entries
    }

    /// The table's thresholds as named fields.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::from(self.entries.map(|(_, min)| min))
    }

    /// Minimum width of `tier`; `0.0` for [`Breakpoint::Initial`].
    ///
    /// Negative widths also classify as [`Breakpoint::Initial`]; use
    /// [`BreakpointTable::width_range`] for the unbounded lower end.
    #[must_use]
    pub fn min_width(&self, tier: Breakpoint) -> f64 {
        match tier.index().checked_sub(1) {
            Some(i) => self.entries[i].1,
            None => 0.0,
        }
    }

    /// The half-open width range that classifies as `tier`.
    ///
    /// [`Breakpoint::Initial`] starts at `f64::NEG_INFINITY` and
    /// [`Breakpoint::Xxl`] ends at `f64::INFINITY`.
    #[must_use]
    pub fn width_range(&self, tier: Breakpoint) -> Range<f64> {
        let start = match tier {
            Breakpoint::Initial => f64::NEG_INFINITY,
            _ => self.min_width(tier),
        };
        let end = match tier.wider() {
            Some(next) => self.min_width(next),
            None => f64::INFINITY,
        };
        start..end
    }

    /// Maps `width` to the widest tier whose minimum width it meets.
    ///
    /// Negative widths, `-inf` and NaN classify as [`Breakpoint::Initial`];
    /// `+inf` classifies as [`Breakpoint::Xxl`].
    #[must_use]
    pub fn classify(&self, width: f64) -> Breakpoint {
        // Ranges are open upward, so the widest match must be found first.
        for &(tier, min) in self.entries.iter().rev() {
            if width >= min {
                return tier;
            }
        }
        Breakpoint::Initial
    }

    /// Like [`BreakpointTable::classify`], reading the width from `source`.
    #[must_use]
    pub fn classify_source(&self, source: &impl WidthSource) -> Breakpoint {
        self.classify(source.width())
    }

    /// Selects the value for `width` from `values`.
    ///
    /// Tiers are scanned from widest to narrowest and the first tier that is
    /// both set and met by `width` wins; otherwise the initial value is used.
    /// A value set for a narrow tier therefore also applies to every wider
    /// tier left unset.
    #[must_use]
    pub fn resolve<'a, T>(&self, width: f64, values: &'a Responsive<T>) -> &'a T {
        self.resolve_with_tier(width, values).1
    }

    /// Like [`BreakpointTable::resolve`], also returning the tier whose entry
    /// supplied the value.
    ///
    /// The tier can be narrower than [`BreakpointTable::classify`] reports
    /// when wider tiers are unset.
    #[must_use]
    pub fn resolve_with_tier<'a, T>(
        &self,
        width: f64,
        values: &'a Responsive<T>,
    ) -> (Breakpoint, &'a T) {
        for &(tier, min) in self.entries.iter().rev() {
            if width < min || width.is_nan() {
                continue;
            }
            if let Some(value) = values.get(tier) {
                trace_event!(width, %tier, "resolved responsive value");
                return (tier, value);
            }
        }
        trace_event!(width, tier = %Breakpoint::Initial, "resolved responsive value");
        (Breakpoint::Initial, values.initial())
    }
}

fn check_threshold(tier: Breakpoint, value: f64, previous: Option<f64>) -> Result<(), TableError> {
    if !value.is_finite() {
        return Err(TableError::NotFinite { tier, value });
    }
    if value < 0.0 {
        return Err(TableError::Negative { tier, value });
    }
    match previous {
        Some(previous) if value <= previous => Err(TableError::NotIncreasing {
            tier,
            value,
            previous,
        }),
        _ => Ok(()),
    }
}

impl TryFrom<Thresholds> for BreakpointTable {
    type Error = TableError;

    fn try_from(thresholds: Thresholds) -> Result<Self, Self::Error> {
        Self::from_thresholds(thresholds)
    }
}

impl TryFrom<[f64; 5]> for BreakpointTable {
    type Error = TableError;

    fn try_from(thresholds: [f64; 5]) -> Result<Self, Self::Error> {
        Self::new(thresholds)
    }
}

impl From<BreakpointTable> for Thresholds {
    fn from(table: BreakpointTable) -> Self {
        table.thresholds()
    }
}
