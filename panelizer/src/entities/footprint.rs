use crate::entities::ensure_positive;
use crate::util::FPA;
use anyhow::Result;
use serde::Serialize;

/// The rectangular outline of a single PCB to be placed on a panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoardFootprint {
    width: f64,
    height: f64,
    allow_rotation: bool,
}

impl BoardFootprint {
    pub fn try_new(width: f64, height: f64, allow_rotation: bool) -> Result<Self> {
        ensure_positive("board width", width)?;
        ensure_positive("board height", height)?;
        Ok(Self {
            width,
            height,
            allow_rotation,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn allow_rotation(&self) -> bool {
        self.allow_rotation
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The same footprint turned by 90°
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            allow_rotation: self.allow_rotation,
        }
    }

    /// Square boards look identical after rotation
    pub fn is_square(&self) -> bool {
        FPA(self.width) == FPA(self.height)
    }
}
