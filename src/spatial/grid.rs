//! Dense 2D grid with world-space cell positions and explicit bounds policies
//!
//! Every accessor comes in up to three flavours that differ only in how they
//! treat coordinates outside the grid:
//! - exact (`get`, `set`, `fill_area`, ...) returns [`GenerationError::OutOfRange`]
//! - clamped (`get_clamped`, `set_clamped`) snaps each axis to the nearest edge
//! - defaulted/secure (`get_or`, `set_if_in_range`, `*_secure`) skips the
//!   operation entirely and reports whether it took effect
//!
//! Cells are addressed as `(x, y)` with `0 <= x < width` and `0 <= y < height`.
//! World positions lie on the XZ plane: `origin + (x, 0, y) * cell_size`.

use ndarray::{Array2, s};
use num_traits::ToPrimitive;
use std::ops::Range;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GenerationError, Result, invalid_parameter, out_of_range};

/// Dense grid of `T` values with a precomputed world position per cell
///
/// Both planes are stored as `(width, height)` arrays indexed `[x, y]`, so
/// they always share dimensions. Positions never change after construction;
/// regeneration builds a new grid instead of resizing this one.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid<T> {
    values: Array2<T>,
    positions: Array2<[f64; 3]>,
    cell_size: f64,
    origin: [f64; 3],
}

impl<T: Clone> SpatialGrid<T> {
    /// Create a grid with every cell set to `initial`
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidParameter`] if a dimension is zero or
    /// above [`MAX_GRID_DIMENSION`], or if `cell_size` or `origin` is not a
    /// finite value (with `cell_size` strictly positive).
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f64,
        origin: [f64; 3],
        initial: T,
    ) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be a finite value greater than zero",
            ));
        }

        if origin.iter().any(|component| !component.is_finite()) {
            return Err(invalid_parameter(
                "origin",
                &format!("{origin:?}"),
                &"all components must be finite",
            ));
        }

        // A fused multiply-add would round differently from origin + index * cell_size
        #[allow(clippy::suboptimal_flops)]
        let positions = Array2::from_shape_fn((width, height), |(x, y)| {
            [
                origin[0] + x as f64 * cell_size,
                origin[1],
                origin[2] + y as f64 * cell_size,
            ]
        });

        Ok(Self {
            values: Array2::from_elem((width, height), initial),
            positions,
            cell_size,
            origin,
        })
    }
}

impl<T: Clone + Default> SpatialGrid<T> {
    /// Create a grid with every cell left at `T::default()`
    ///
    /// # Errors
    ///
    /// Same conditions as [`SpatialGrid::new`].
    pub fn with_default(
        width: usize,
        height: usize,
        cell_size: f64,
        origin: [f64; 3],
    ) -> Result<Self> {
        Self::new(width, height, cell_size, origin, T::default())
    }
}

impl<T> SpatialGrid<T> {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.values.nrows()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.values.ncols()
    }

    /// Grid dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// World-space edge length of one cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// World position of cell `(0, 0)`
    pub const fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Whether `(x, y)` addresses a cell of this grid
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Exact read
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] when `(x, y)` is outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Result<&T> {
        self.index(x, y)
            .and_then(|index| self.values.get(index))
            .ok_or_else(|| self.range_error(x, y))
    }

    /// Read after clamping each axis into the grid independently
    // Clamped indices are always inside a non-empty grid
    #[allow(clippy::indexing_slicing)]
    pub fn get_clamped(&self, x: i32, y: i32) -> &T {
        &self.values[self.clamp(x, y)]
    }

    /// Exact write
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] when `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<()> {
        let error = self.range_error(x, y);
        let cell = self
            .index(x, y)
            .and_then(|index| self.values.get_mut(index))
            .ok_or(error)?;
        *cell = value;
        Ok(())
    }

    /// Write to the nearest in-range cell
    // Clamped indices are always inside a non-empty grid
    #[allow(clippy::indexing_slicing)]
    pub fn set_clamped(&mut self, x: i32, y: i32, value: T) {
        let index = self.clamp(x, y);
        self.values[index] = value;
    }

    /// Write only if `(x, y)` is inside the grid; returns whether it was written
    pub fn set_if_in_range(&mut self, x: i32, y: i32, value: T) -> bool {
        self.index(x, y)
            .and_then(|index| self.values.get_mut(index))
            .is_some_and(|cell| {
                *cell = value;
                true
            })
    }

    /// Precomputed world position of a cell
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] when `(x, y)` is outside the grid.
    pub fn world_position(&self, x: i32, y: i32) -> Result<[f64; 3]> {
        self.index(x, y)
            .and_then(|index| self.positions.get(index))
            .copied()
            .ok_or_else(|| self.range_error(x, y))
    }

    /// Cell coordinates containing a world position
    ///
    /// Uses `floor((position - origin) / cell_size)` on the X and Z axes, so
    /// a position exactly on a boundary belongs to the higher-index cell. The
    /// result may lie outside the grid; `None` means the position is not
    /// representable as cell coordinates (non-finite or beyond `i32`).
    pub fn cell_index(&self, position: [f64; 3]) -> Option<[i32; 2]> {
        let x = ((position[0] - self.origin[0]) / self.cell_size)
            .floor()
            .to_i32()?;
        let y = ((position[2] - self.origin[2]) / self.cell_size)
            .floor()
            .to_i32()?;
        Some([x, y])
    }

    /// Exact read by world position
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] when the position maps outside
    /// the grid or cannot be mapped at all.
    pub fn get_at_position(&self, position: [f64; 3]) -> Result<&T> {
        let [x, y] = self.position_cell(position)?;
        self.get(x, y)
    }

    /// Clamped read by world position, `None` only for unmappable positions
    pub fn get_clamped_at_position(&self, position: [f64; 3]) -> Option<&T> {
        self.cell_index(position)
            .map(|[x, y]| self.get_clamped(x, y))
    }

    /// Exact write by world position
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] when the position maps outside
    /// the grid or cannot be mapped at all.
    pub fn set_at_position(&mut self, position: [f64; 3], value: T) -> Result<()> {
        let [x, y] = self.position_cell(position)?;
        self.set(x, y, value)
    }

    /// Clamped write by world position; returns whether the position was mappable
    pub fn set_clamped_at_position(&mut self, position: [f64; 3], value: T) -> bool {
        match self.cell_index(position) {
            Some([x, y]) => {
                self.set_clamped(x, y, value);
                true
            }
            None => false,
        }
    }

    /// Write by world position only if it maps inside the grid
    pub fn set_if_in_range_at_position(&mut self, position: [f64; 3], value: T) -> bool {
        self.cell_index(position)
            .is_some_and(|[x, y]| self.set_if_in_range(x, y, value))
    }

    /// Iterate over `(cell, value, world position)` in x-major order
    pub fn cells(&self) -> impl Iterator<Item = ([i32; 2], &T, [f64; 3])> + '_ {
        self.values
            .indexed_iter()
            .zip(self.positions.iter())
            .map(|(((x, y), value), position)| ([x as i32, y as i32], value, *position))
    }

    /// Borrow the underlying `(width, height)` value array
    pub const fn values(&self) -> &Array2<T> {
        &self.values
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let column = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (column < self.width() && row < self.height()).then_some([column, row])
    }

    fn clamp(&self, x: i32, y: i32) -> [usize; 2] {
        let max_x = self.width().saturating_sub(1);
        let max_y = self.height().saturating_sub(1);
        [
            usize::try_from(x).map_or(0, |column| column.min(max_x)),
            usize::try_from(y).map_or(0, |row| row.min(max_y)),
        ]
    }

    /// Index ranges of an area, or `None` if either corner is outside the grid
    ///
    /// An area with a zero extent is empty and always accepted.
    fn area_ranges(
        &self,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    ) -> Option<(Range<usize>, Range<usize>)> {
        if width == 0 || height == 0 {
            return Some((0..0, 0..0));
        }
        let [start_x, start_y] = self.index(x, y)?;
        let end_x = start_x.checked_add(width)?;
        let end_y = start_y.checked_add(height)?;
        (end_x <= self.width() && end_y <= self.height()).then_some((start_x..end_x, start_y..end_y))
    }

    fn position_cell(&self, position: [f64; 3]) -> Result<[i32; 2]> {
        self.cell_index(position).ok_or_else(|| {
            invalid_parameter(
                "position",
                &format!("{position:?}"),
                &"cannot be mapped to a grid cell",
            )
        })
    }

    fn range_error(&self, x: i32, y: i32) -> GenerationError {
        out_of_range(x, y, self.width(), self.height())
    }

    fn area_error(&self, x: i32, y: i32, width: usize, height: usize) -> GenerationError {
        // Report the first corner that falls outside
        if self.in_range(x, y) {
            let far_x = i64::from(x) + width as i64 - 1;
            let far_y = i64::from(y) + height as i64 - 1;
            self.range_error(
                far_x.to_i32().unwrap_or(i32::MAX),
                far_y.to_i32().unwrap_or(i32::MAX),
            )
        } else {
            self.range_error(x, y)
        }
    }
}

impl<T: Clone> SpatialGrid<T> {
    /// Read, falling back to `fallback` outside the grid without touching storage
    pub fn get_or(&self, x: i32, y: i32, fallback: T) -> T {
        self.index(x, y)
            .and_then(|index| self.values.get(index))
            .cloned()
            .unwrap_or(fallback)
    }

    /// Read by world position with a fallback for positions outside the grid
    pub fn get_or_at_position(&self, position: [f64; 3], fallback: T) -> T {
        match self.cell_index(position) {
            Some([x, y]) => self.get_or(x, y, fallback),
            None => fallback,
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    /// Overwrite the `width` × `height` area anchored at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] without writing anything if any
    /// corner of the area is outside the grid.
    pub fn fill_area(&mut self, value: T, x: i32, y: i32, width: usize, height: usize) -> Result<()> {
        let (columns, rows) = self
            .area_ranges(x, y, width, height)
            .ok_or_else(|| self.area_error(x, y, width, height))?;
        self.values.slice_mut(s![columns, rows]).fill(value);
        Ok(())
    }

    /// Like [`SpatialGrid::fill_area`] but skips the whole operation when out of range
    ///
    /// Returns whether the area was written.
    pub fn fill_area_secure(
        &mut self,
        value: T,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    ) -> bool {
        match self.area_ranges(x, y, width, height) {
            Some((columns, rows)) => {
                self.values.slice_mut(s![columns, rows]).fill(value);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone + PartialEq> SpatialGrid<T> {
    /// Rewrite every cell equal to `old_value`; returns the number rewritten
    pub fn replace(&mut self, new_value: &T, old_value: &T) -> usize {
        replace_matching(self.values.iter_mut(), new_value, old_value)
    }

    /// Conditional overwrite restricted to an area
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::OutOfRange`] without writing anything if any
    /// corner of the area is outside the grid.
    pub fn replace_area(
        &mut self,
        new_value: &T,
        old_value: &T,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    ) -> Result<usize> {
        let (columns, rows) = self
            .area_ranges(x, y, width, height)
            .ok_or_else(|| self.area_error(x, y, width, height))?;
        Ok(replace_matching(
            self.values.slice_mut(s![columns, rows]).iter_mut(),
            new_value,
            old_value,
        ))
    }

    /// Conditional overwrite that skips the whole area when out of range
    ///
    /// Returns the number of rewritten cells, or `None` if the area was rejected.
    pub fn replace_area_secure(
        &mut self,
        new_value: &T,
        old_value: &T,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    ) -> Option<usize> {
        let (columns, rows) = self.area_ranges(x, y, width, height)?;
        Some(replace_matching(
            self.values.slice_mut(s![columns, rows]).iter_mut(),
            new_value,
            old_value,
        ))
    }

    /// Number of cells equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.values.iter().filter(|cell| *cell == value).count()
    }
}

fn replace_matching<'a, T, I>(cells: I, new_value: &T, old_value: &T) -> usize
where
    T: Clone + PartialEq + 'a,
    I: Iterator<Item = &'a mut T>,
{
    let mut replaced = 0;
    for cell in cells {
        if *cell == *old_value {
            *cell = new_value.clone();
            replaced += 1;
        }
    }
    replaced
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
