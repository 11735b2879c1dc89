// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sets of breakpoint tiers.

use core::ops::{Bound, RangeBounds};

use bitflags::bitflags;

use crate::{Breakpoint, BreakpointTable, WidthSource};

bitflags! {
    /// A set of [`Breakpoint`] tiers.
    ///
    /// Useful for "apply on these screens" predicates, where [`crate::Responsive`]
    /// is the wrong shape (for example toggling visibility only between `sm`
    /// and `lg`).
    ///
    /// ```rust
    /// use understory_breakpoints::{Breakpoint, BreakpointSet, BreakpointTable};
    ///
    /// let desktop = BreakpointSet::range(Breakpoint::Lg..);
    /// assert!(desktop.matches(&BreakpointTable::TAILWIND, 1200.0));
    /// assert!(!desktop.matches(&BreakpointTable::TAILWIND, 800.0));
    ///
    /// let phones = !desktop;
    /// assert_eq!(phones, BreakpointSet::range(..Breakpoint::Lg));
    /// ```
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    #[must_use]
    pub struct BreakpointSet: u8 {
        /// [`Breakpoint::Initial`].
        const INITIAL = 1;
        /// [`Breakpoint::Sm`].
        const SM = 1 << 1;
        /// [`Breakpoint::Md`].
        const MD = 1 << 2;
        /// [`Breakpoint::Lg`].
        const LG = 1 << 3;
        /// [`Breakpoint::Xl`].
        const XL = 1 << 4;
        /// [`Breakpoint::Xxl`].
        const XXL = 1 << 5;
    }
}

impl BreakpointSet {
    /// The contiguous set of tiers covered by `range`.
    ///
    /// An empty or inverted range yields the empty set.
    pub fn range(range: impl RangeBounds<Breakpoint>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(tier) => tier.index(),
            Bound::Excluded(tier) => tier.index() + 1,
            Bound::Unbounded => 0,
        };
        // Exclusive end index.
        let end = match range.end_bound() {
            Bound::Included(tier) => tier.index() + 1,
            Bound::Excluded(tier) => tier.index(),
            Bound::Unbounded => Breakpoint::ALL.len(),
        };
        if start >= end {
            return Self::empty();
        }
        Self::from_bits_truncate((1_u8 << end) - (1_u8 << start))
    }

    /// Returns `true` if `tier` is in the set.
    #[must_use]
    pub fn contains_tier(self, tier: Breakpoint) -> bool {
        self.contains(Self::from(tier))
    }

    /// Iterates over the tiers in the set, narrowest first.
    pub fn tiers(self) -> impl Iterator<Item = Breakpoint> {
        Breakpoint::ALL
            .into_iter()
            .filter(move |&tier| self.contains_tier(tier))
    }

    /// The narrowest tier in the set.
    #[must_use]
    pub fn narrowest(self) -> Option<Breakpoint> {
        self.tiers().next()
    }

    /// The widest tier in the set.
    #[must_use]
    pub fn widest(self) -> Option<Breakpoint> {
        self.tiers().last()
    }

    /// Returns `true` if `width` classifies into one of the tiers in the set.
    #[must_use]
    pub fn matches(self, table: &BreakpointTable, width: f64) -> bool {
        self.contains_tier(table.classify(width))
    }

    /// Like [`BreakpointSet::matches`], reading the width from `source`.
    #[must_use]
    pub fn matches_source(self, table: &BreakpointTable, source: &impl WidthSource) -> bool {
        self.matches(table, source.width())
    }
}

impl From<Breakpoint> for BreakpointSet {
    fn from(tier: Breakpoint) -> Self {
        Self::from_bits_retain(1_u8 << tier.index())
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, tier| set | Self::from(tier))
    }
}
