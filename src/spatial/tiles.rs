//! Tile classification for generated maps

/// Classification of a single grid cell
///
/// `Wall` is the initial state of every cell. Room stamping and corridor
/// carving turn cells into `Passageway`; outline pruning turns isolated
/// walls into `Void`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Solid boundary
    #[default]
    Wall,
    /// Open, walkable floor
    Passageway,
    /// Outside the playable area
    Void,
}

impl TileType {
    /// Single character used by the text renderer
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Passageway => '.',
            Self::Void => ' ',
        }
    }

    /// RGBA color used by the image exporters (void is fully transparent)
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Wall => [72, 64, 60, 255],
            Self::Passageway => [214, 196, 160, 255],
            Self::Void => [0, 0, 0, 0],
        }
    }

    /// Whether the cell can be walked on
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Passageway)
    }
}
