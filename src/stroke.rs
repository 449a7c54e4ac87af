use egui::{Color32, Pos2};

/// Brush diameter in pixels, always within `BrushWidth::MIN..=BrushWidth::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrushWidth(u8);

impl BrushWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Returns `None` when `pixels` is outside the supported range.
    pub fn new(pixels: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&pixels)
            .then_some(Self(pixels))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable width, smallest first
    pub fn all() -> impl Iterator<Item = BrushWidth> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl std::fmt::Display for BrushWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One straight line drawn between two consecutive pointer samples.
///
/// Coordinates are in canvas pixels, with integer coordinates at pixel centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Pos2,
    end: Pos2,
    color: Color32,
    width: BrushWidth,
}

impl Segment {
    pub fn new(start: Pos2, end: Pos2, color: Color32, width: BrushWidth) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> BrushWidth {
        self.width
    }
}
