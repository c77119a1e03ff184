//! Tests for consistency between defaults and limits

#[cfg(test)]
mod tests {
    use roomcarve::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_PIXELS_PER_CELL, DEFAULT_ROOM_MAX_SIZE,
        DEFAULT_ROOM_MIN_SIZE, DEFAULT_WIDTH, MAX_GRID_DIMENSION, MAX_PIXELS_PER_CELL, ROOM_BORDER,
        VISUALIZATION_SUFFIX,
    };

    // Tests the default room sizes fit the default grid with a border
    // Verified by raising the default max room size to the grid width
    #[test]
    fn test_default_rooms_fit_default_grid() {
        assert!(DEFAULT_ROOM_MIN_SIZE >= 1);
        assert!(DEFAULT_ROOM_MIN_SIZE < DEFAULT_ROOM_MAX_SIZE);
        assert!(DEFAULT_ROOM_MAX_SIZE < DEFAULT_WIDTH.min(DEFAULT_HEIGHT));
        assert_eq!(ROOM_BORDER, 1);
    }

    // Tests default grid and export settings lie inside their limits
    // Verified by setting the default scale above the maximum
    #[test]
    fn test_defaults_within_limits() {
        assert!(DEFAULT_WIDTH <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_CELL_SIZE > 0.0);
        assert!((1..=MAX_PIXELS_PER_CELL).contains(&DEFAULT_PIXELS_PER_CELL));
        assert!(VISUALIZATION_SUFFIX.starts_with('_'));
    }
}
