// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse forwarding through the decorators, so toggles issued on the
//! outermost layer of a stack reach the controller.

use treeline_collapse::Collapse;

use crate::{Arrows, CollapseIcons, Indented, Line};

impl<T> Collapse for Indented<T>
where
    T: Collapse,
    T::Node: Into<Line>,
{
    fn is_collapsed(&mut self, pos: &T::Position) -> bool {
        self.inner_mut().is_collapsed(pos)
    }

    fn set_collapsed(&mut self, pos: &T::Position, collapsed: bool) {
        self.inner_mut().set_collapsed(pos, collapsed);
    }
}

impl<T> Collapse for Arrows<T>
where
    T: Collapse,
    T::Node: Into<Line>,
{
    fn is_collapsed(&mut self, pos: &T::Position) -> bool {
        self.inner_mut().is_collapsed(pos)
    }

    fn set_collapsed(&mut self, pos: &T::Position, collapsed: bool) {
        self.inner_mut().set_collapsed(pos, collapsed);
    }
}

impl<T> Collapse for CollapseIcons<T>
where
    T: Collapse,
    T::Node: Into<Line>,
{
    fn is_collapsed(&mut self, pos: &T::Position) -> bool {
        self.inner_mut().is_collapsed(pos)
    }

    fn set_collapsed(&mut self, pos: &T::Position, collapsed: bool) {
        self.inner_mut().set_collapsed(pos, collapsed);
    }
}
