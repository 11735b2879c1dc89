// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The six breakpoint tiers.

use core::fmt;
use core::str::FromStr;

/// A named width tier.
///
/// Tiers are ordered from narrowest to widest, so `Breakpoint::Initial <
/// Breakpoint::Sm < ... < Breakpoint::Xxl`. [`Breakpoint::Initial`] has no
/// lower bound and matches whenever no larger tier does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Anything narrower than [`Breakpoint::Sm`].
    #[default]
    Initial,
    /// Small screens (Tailwind `sm`).
    Sm,
    /// Medium screens (Tailwind `md`).
    Md,
    /// Large screens (Tailwind `lg`).
    Lg,
    /// Extra large screens (Tailwind `xl`).
    Xl,
    /// Tailwind `2xl`.
    #[cfg_attr(feature = "serde", serde(alias = "2xl"))]
    Xxl,
}

impl Breakpoint {
    /// All tiers, narrowest first.
    pub const ALL: [Self; 6] = [
        Self::Initial,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// The tiers that carry an explicit minimum width, narrowest first.
    pub const THRESHOLDED: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Position of this tier in [`Breakpoint::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the tier at `index` in [`Breakpoint::ALL`], if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The lowercase name of this tier: `"initial"`, `"sm"`, `"md"`, `"lg"`,
    /// `"xl"` or `"xxl"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    /// The next wider tier, or `None` for [`Breakpoint::Xxl`].
    #[must_use]
    pub const fn wider(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The next narrower tier, or `None` for [`Breakpoint::Initial`].
    #[must_use]
    pub const fn narrower(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index),
            None => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown breakpoint name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBreakpointError;

impl fmt::Display for ParseBreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `initial`, `sm`, `md`, `lg`, `xl`, `xxl`")
    }
}

impl core::error::Error for ParseBreakpointError {}

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    /// Parses a tier name. Tailwind's `2xl` spelling is accepted for
    /// [`Breakpoint::Xxl`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "initial" => Ok(Self::Initial),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "xxl" | "2xl" => Ok(Self::Xxl),
            _ => Err(ParseBreakpointError),
        }
    }
}
