use serde::{Deserialize, Serialize};

/// Anchor used when cropping or placing an overlay: the kept region is
/// positioned relative to this reference point of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gravity {
    NorthWest,
    North,
    NorthEast,
    West,
    #[default]
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Gravity {
    /// Origin of a `cw` x `ch` window inside a `w` x `h` image. The window
    /// is assumed to fit; callers clamp it to the image bounds first.
    pub fn origin(self, w: u32, h: u32, cw: u32, ch: u32) -> (u32, u32) {
        let cw = cw.min(w);
        let ch = ch.min(h);
        let x = match self {
            Gravity::NorthWest | Gravity::West | Gravity::SouthWest => 0,
            Gravity::North | Gravity::Center | Gravity::South => (w - cw) / 2,
            Gravity::NorthEast | Gravity::East | Gravity::SouthEast => w - cw,
        };
        let y = match self {
            Gravity::NorthWest | Gravity::North | Gravity::NorthEast => 0,
            Gravity::West | Gravity::Center | Gravity::East => (h - ch) / 2,
            Gravity::SouthWest | Gravity::South | Gravity::SouthEast => h - ch,
        };
        (x, y)
    }
}
