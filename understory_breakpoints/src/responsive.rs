// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Breakpoint, BreakpointTable, WidthSource};

/// A value with optional per-breakpoint overrides.
///
/// `initial` is always present; each of `sm` through `xxl` may be unset.
/// Resolution picks the widest set tier that the width meets, falling back
/// to narrower set tiers and finally to `initial`.
///
/// ```rust
/// use understory_breakpoints::Responsive;
///
/// let columns = Responsive::new(1).sm(2).xl(4);
/// assert_eq!(*columns.resolve(320.0), 1);
/// assert_eq!(*columns.resolve(1100.0), 2);
/// assert_eq!(*columns.resolve(2000.0), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Responsive<T> {
    initial: T,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    sm: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    md: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    lg: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    xl: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none", alias = "2xl")
    )]
    xxl: Option<T>,
}

impl<T> Responsive<T> {
    /// Creates a value set with only the initial value.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            initial,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }

    /// Sets the [`Breakpoint::Sm`] value.
    #[must_use]
    pub fn sm(mut self, value: T) -> Self {
        self.sm = Some(value);
        self
    }

    /// Sets the [`Breakpoint::Md`] value.
    #[must_use]
    pub fn md(mut self, value: T) -> Self {
        self.md = Some(value);
        self
    }

    /// Sets the [`Breakpoint::Lg`] value.
    #[must_use]
    pub fn lg(mut self, value: T) -> Self {
        self.lg = Some(value);
        self
    }

    /// Sets the [`Breakpoint::Xl`] value.
    #[must_use]
    pub fn xl(mut self, value: T) -> Self {
        self.xl = Some(value);
        self
    }

    /// Sets the [`Breakpoint::Xxl`] value.
    #[must_use]
    pub fn xxl(mut self, value: T) -> Self {
        self.xxl = Some(value);
        self
    }

    /// The initial (fallback) value.
    #[must_use]
    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// The value set for `tier`, if any.
    ///
    /// [`Breakpoint::Initial`] always returns `Some`.
    #[must_use]
    pub fn get(&self, tier: Breakpoint) -> Option<&T> {
        match tier {
            Breakpoint::Initial => Some(&self.initial),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
            Breakpoint::Xxl => self.xxl.as_ref(),
        }
    }

    /// Replaces the value for `tier`, returning the previous one.
    ///
    /// For [`Breakpoint::Initial`], `None` leaves the initial value in place
    /// and returns `None`.
    pub fn set(&mut self, tier: Breakpoint, value: Option<T>) -> Option<T> {
        let slot = match tier {
            Breakpoint::Initial => {
                return value.map(|value| core::mem::replace(&mut self.initial, value));
            }
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
            Breakpoint::Xxl => &mut self.xxl,
        };
        core::mem::replace(slot, value)
    }

    /// Returns `true` if no tier other than `initial` is set.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        Breakpoint::THRESHOLDED
            .into_iter()
            .all(|tier| self.get(tier).is_none())
    }

    /// Iterates over the set tiers and their values, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|tier| self.get(tier).map(|value| (tier, value)))
    }

    /// Applies `f` to every set value.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        Responsive {
            initial: f(self.initial),
            sm: self.sm.map(&mut f),
            md: self.md.map(&mut f),
            lg: self.lg.map(&mut f),
            xl: self.xl.map(&mut f),
            xxl: self.xxl.map(&mut f),
        }
    }

    /// Resolves against [`BreakpointTable::TAILWIND`].
    #[must_use]
    pub fn resolve(&self, width: f64) -> &T {
        BreakpointTable::TAILWIND.resolve(width, self)
    }

    /// Resolves against a custom table.
    #[must_use]
    pub fn resolve_with(&self, table: &BreakpointTable, width: f64) -> &T {
        table.resolve(width, self)
    }

    /// Resolves against [`BreakpointTable::TAILWIND`] using a width source.
    #[must_use]
    pub fn resolve_from(&self, source: &impl WidthSource) -> &T {
        self.resolve(source.width())
    }

    /// The tier whose entry [`Responsive::resolve`] would return.
    #[must_use]
    pub fn resolved_tier(&self, width: f64) -> Breakpoint {
        BreakpointTable::TAILWIND.resolve_with_tier(width, self).0
    }

    /// Resolves against [`BreakpointTable::TAILWIND`], consuming the set.
    #[must_use]
    pub fn into_resolved(self, width: f64) -> T {
        self.into_resolved_with(&BreakpointTable::TAILWIND, width)
    }

    /// Resolves against a custom table, consuming the set.
    #[must_use]
    pub fn into_resolved_with(mut self, table: &BreakpointTable, width: f64) -> T {
        let tier = table.resolve_with_tier(width, &self).0;
        self.take(tier).unwrap_or(self.initial)
    }

    fn take(&mut self, tier: Breakpoint) -> Option<T> {
        match tier {
            Breakpoint::Initial => None,
            Breakpoint::Sm => self.sm.take(),
            Breakpoint::Md => self.md.take(),
            Breakpoint::Lg => self.lg.take(),
            Breakpoint::Xl => self.xl.take(),
            Breakpoint::Xxl => self.xxl.take(),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(initial: T) -> Self {
        Self::new(initial)
    }
}
