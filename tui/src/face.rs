//! Analog clock painting.

use std::collections::BTreeSet;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use termodoro_types::{Cell, ClockFace, HandLength, PhaseKind, rim};

use crate::theme::{Palette, styles};

/// Rim cells for the last diameter drawn.
///
/// The outline only depends on the diameter, so it is rebuilt on resize
/// rather than every frame.
#[derive(Debug, Default)]
pub(crate) struct RimCache {
    diameter: Option<u16>,
    cells: BTreeSet<Cell>,
}

impl RimCache {
    pub(crate) fn get(&mut self, diameter: u16) -> &BTreeSet<Cell> {
        if self.diameter != Some(diameter) {
            self.cells = rim(diameter);
            self.diameter = Some(diameter);
        }
        &self.cells
    }
}

/// What the face shows this frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FaceState {
    pub diameter: u16,
    pub phase: PhaseKind,
    /// `None` once the phase is done.
    pub hand_position: Option<f64>,
    pub hand_length: HandLength,
}

/// Paints rim then hand, so the pivot takes the hand's color.
pub(crate) fn paint(
    buf: &mut Buffer,
    area: Rect,
    cache: &mut RimCache,
    state: FaceState,
    palette: &Palette,
) {
    let rim_style = styles::rim(palette);
    for &cell in cache.get(state.diameter) {
        paint_cell(buf, area, cell, rim_style);
    }

    if let Some(position) = state.hand_position {
        let hand_style = styles::hand(palette, state.phase);
        let face = ClockFace::new(state.diameter);
        for cell in face.hand(state.hand_length, position) {
            paint_cell(buf, area, cell, hand_style);
        }
    }
}

/// Cells outside `area` or the buffer are skipped.
fn paint_cell(buf: &mut Buffer, area: Rect, cell: Cell, style: Style) {
    if cell.x >= area.width || cell.y >= area.height {
        return;
    }
    let (Some(x), Some(y)) = (area.x.checked_add(cell.x), area.y.checked_add(cell.y)) else {
        return;
    };
    if let Some(target) = buf.cell_mut((x, y)) {
        target.set_symbol(" ").set_style(style);
    }
}
