//! Integer rectangles describing room footprints

/// Axis-aligned rectangle anchored at its minimum corner
///
/// Covers the cells `[x, x + width)` × `[y, y + height)`. Overlap tests use
/// the closed boundary `[x, x + width]`, so two regions whose cells merely
/// touch along an edge still intersect. Accepted rooms are therefore always
/// separated by at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Minimum column
    pub x: i32,
    /// Minimum row
    pub y: i32,
    /// Extent along x (positive)
    pub width: i32,
    /// Extent along y (positive)
    pub height: i32,
}

impl Region {
    /// Create a region from its anchor and extents
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a square region with edge `size`
    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Exclusive column bound
    pub const fn end_x(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive row bound
    pub const fn end_y(&self) -> i32 {
        self.y + self.height
    }

    /// Integer midpoint, rounded toward the anchor
    pub const fn center(&self) -> [i32; 2] {
        [self.x + self.width / 2, self.y + self.height / 2]
    }

    /// Closed-interval overlap test, symmetric in its arguments
    pub const fn intersects(&self, other: &Self) -> bool {
        !(self.end_x() < other.x
            || self.x > other.end_x()
            || self.end_y() < other.y
            || self.y > other.end_y())
    }

    /// Whether the cell lies inside the region's half-open footprint
    pub const fn contains(&self, cell: [i32; 2]) -> bool {
        cell[0] >= self.x && cell[0] < self.end_x() && cell[1] >= self.y && cell[1] < self.end_y()
    }

    /// Number of cells covered
    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}
