use crate::game::{Position, SIZE};

/// Where the grid sits on the input surface, in the surface's own units
/// (pixels, terminal columns/rows, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Exclusive right and bottom edges of the visible surface
    pub max_x: f32,
    pub max_y: f32,
}

impl BoardGeometry {
    pub fn new(origin_x: f32, origin_y: f32, cell_width: f32, cell_height: f32) -> Self {
        BoardGeometry {
            origin_x,
            origin_y,
            cell_width,
            cell_height,
            max_x: f32::INFINITY,
            max_y: f32::INFINITY,
        }
    }

    /// Same mapping, but points at or past (`max_x`, `max_y`) hit nothing
    pub fn clipped_to(self, max_x: f32, max_y: f32) -> Self {
        BoardGeometry {
            max_x,
            max_y,
            ..self
        }
    }

    /// Square cells starting at the surface origin
    pub fn square(cell_size: f32) -> Self {
        Self::new(0.0, 0.0, cell_size, cell_size)
    }

    /// Cell under the point, `None` outside the grid or the visible
    /// surface. `x` selects the column and `y` the row.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }
        if !(x < self.max_x && y < self.max_y) {
            return None;
        }
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if !dx.is_finite() || !dy.is_finite() || dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.cell_width) as usize;
        let row = (dy / self.cell_height) as usize;
        (row < SIZE && col < SIZE).then(|| Position::new(row, col))
    }
}
