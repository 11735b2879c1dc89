// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Using kurbo geometry as a width source.

#![cfg(feature = "kurbo")]

use kurbo::{Rect, Size};
use understory_breakpoints::{Breakpoint, BreakpointTable, Responsive, WidthSource};

#[test]
fn size_and_rect_report_their_width() {
    assert_eq!(Size::new(800.0, 600.0).width(), 800.0);
    assert_eq!(WidthSource::width(&Rect::new(100.0, 0.0, 1380.0, 720.0)), 1280.0);
}

#[test]
fn window_size_classifies() {
    let table = BreakpointTable::TAILWIND;
    assert_eq!(table.classify_source(&Size::new(390.0, 844.0)), Breakpoint::Initial);
    assert_eq!(table.classify_source(&Size::new(1440.0, 900.0)), Breakpoint::Xl);

    let columns = Responsive::new(1).md(2).xl(3);
    assert_eq!(*columns.resolve_from(&Rect::new(0.0, 0.0, 1024.0, 768.0)), 2);
}
