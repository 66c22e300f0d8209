//! The [`CellKind`] type — what occupies a single grid cell.

/// Occupancy of a grid cell.
///
/// The discriminants match the compact numeric encoding used by renderers
/// (0 empty, 1 wall, 2 start, 3 end).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
}

impl CellKind {
    /// Whether the cell holds anything at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Start and End are the endpoints of a search; at most one of each
    /// exists on a grid.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// ASCII glyph used by the map text format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl From<CellKind> for u8 {
    #[inline]
    fn from(k: CellKind) -> Self {
        k as u8
    }
}

impl TryFrom<u8> for CellKind {
    type Error = u8;

    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Wall),
            2 => Ok(Self::Start),
            3 => Ok(Self::End),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_invert() {
        for k in [CellKind::Empty, CellKind::Wall, CellKind::Start, CellKind::End] {
            assert_eq!(CellKind::from_glyph(k.glyph()), Some(k));
        }
        assert_eq!(CellKind::from_glyph('x'), None);
    }

    #[test]
    fn numeric_encoding() {
        assert_eq!(u8::from(CellKind::Wall), 1);
        assert_eq!(CellKind::try_from(3), Ok(CellKind::End));
        assert_eq!(CellKind::try_from(9), Err(9));
    }

    #[test]
    fn endpoint_kinds() {
        assert!(CellKind::Start.is_endpoint());
        assert!(CellKind::End.is_endpoint());
        assert!(!CellKind::Wall.is_endpoint());
        assert!(CellKind::default().is_empty());
    }
}
