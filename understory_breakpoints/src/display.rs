// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking a display element (a view, widget handle, or node) per breakpoint.

use crate::{Breakpoint, BreakpointTable, Responsive};

/// Selects the display element to show at `width`.
///
/// This is [`crate::resolve`] with every tier optional, including `initial`.
/// When no tier supplies an element, `E::default()` is returned, so `E`'s
/// default should be an empty element that renders nothing.
///
/// ```rust
/// use understory_breakpoints::select_display_element;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum View {
///     #[default]
///     Empty,
///     Drawer,
///     Sidebar,
/// }
///
/// let nav = |width| {
///     select_display_element(width, Some(View::Drawer), None, None, Some(View::Sidebar), None, None)
/// };
/// assert_eq!(nav(400.0), View::Drawer);
/// assert_eq!(nav(1100.0), View::Sidebar);
///
/// // Nothing below `md`.
/// let banner = select_display_element(300.0, None, None, Some(View::Sidebar), None, None, None);
/// assert_eq!(banner, View::Empty);
/// ```
#[must_use]
pub fn select_display_element<E: Default>(
    width: f64,
    initial: Option<E>,
    sm: Option<E>,
    md: Option<E>,
    lg: Option<E>,
    xl: Option<E>,
    xxl: Option<E>,
) -> E {
    let mut elements = Responsive::new(initial);
    for (tier, element) in Breakpoint::THRESHOLDED.into_iter().zip([sm, md, lg, xl, xxl]) {
        // Unset tiers stay unset so wider widths fall through to narrower ones.
        if element.is_some() {
            elements.set(tier, Some(element));
        }
    }
    select_display_element_with(&BreakpointTable::TAILWIND, width, elements)
}

/// Like [`select_display_element`], with a custom table and a value set whose
/// every entry, including `initial`, may be `None`.
///
/// A tier explicitly set to `Some(None)` hides the element from that tier
/// upward (until a wider set tier) rather than falling through.
#[must_use]
pub fn select_display_element_with<E: Default>(
    table: &BreakpointTable,
    width: f64,
    elements: Responsive<Option<E>>,
) -> E {
    elements
        .into_resolved_with(table, width)
        .unwrap_or_default()
}
