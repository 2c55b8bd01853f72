/// Width/height pair in pixels. Serialized as a `[width, height]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Size2 {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size2 {
    /// Build a size from its two dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Dimensions as a tuple, in the order the `image` crate expects.
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<[u32; 2]> for Size2 {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<Size2> for [u32; 2] {
    fn from(s: Size2) -> Self {
        [s.width, s.height]
    }
}

/// Top-left offset in canvas pixels. May be negative or past the canvas edge.
/// Serialized as an `[x, y]` array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Pos2 {
    /// Horizontal offset.
    pub x: i64,
    /// Vertical offset.
    pub y: i64,
}

impl Pos2 {
    /// Build a position from its coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Pos2 {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Pos2> for [i64; 2] {
    fn from(p: Pos2) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
