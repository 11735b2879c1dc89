// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width providers.
//!
//! The resolver never measures anything itself. Hosts pass either a plain
//! width or something implementing [`WidthSource`]: a window size, a
//! viewport rect, or a closure that queries the rendering surface.

use core::fmt;

/// Something that can report the current available width.
pub trait WidthSource {
    /// The current width, in the same unit as the table's thresholds.
    fn width(&self) -> f64;
}

impl WidthSource for f64 {
    fn width(&self) -> f64 {
        *self
    }
}

impl WidthSource for f32 {
    fn width(&self) -> f64 {
        f64::from(*self)
    }
}

impl<S: WidthSource + ?Sized> WidthSource for &S {
    fn width(&self) -> f64 {
        (**self).width()
    }
}

/// A [`WidthSource`] backed by a closure; see [`width_from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F: Fn() -> f64> WidthSource for FromFn<F> {
    fn width(&self) -> f64 {
        (self.0)()
    }
}

/// Wraps a measurement callback as a [`WidthSource`].
///
/// ```rust
/// use core::cell::Cell;
/// use understory_breakpoints::{Breakpoint, BreakpointTable, width_from_fn};
///
/// let window_width = Cell::new(500.0);
/// let source = width_from_fn(|| window_width.get());
/// let table = BreakpointTable::TAILWIND;
///
/// assert_eq!(table.classify_source(&source), Breakpoint::Initial);
/// window_width.set(1300.0);
/// assert_eq!(table.classify_source(&source), Breakpoint::Xl);
/// ```
pub fn width_from_fn<F: Fn() -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

#[cfg(feature = "kurbo")]
impl WidthSource for kurbo::Size {
    fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(feature = "kurbo")]
impl WidthSource for kurbo::Rect {
    fn width(&self) -> f64 {
        Self::width(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_widths() {
        assert_eq!(WidthSource::width(&640.0_f64), 640.0);
        assert_eq!(WidthSource::width(&640.5_f32), 640.5);
        assert_eq!(WidthSource::width(&&1024.0_f64), 1024.0);
    }

    #[test]
    fn closure_is_queried_each_time() {
        let calls = core::cell::Cell::new(0_u32);
        let source = width_from_fn(|| {
            calls.set(calls.get() + 1);
            800.0
        });
        assert_eq!(source.width(), 800.0);
        assert_eq!(source.width(), 800.0);
        assert_eq!(calls.get(), 2);
    }
}
