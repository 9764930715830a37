use crate::util::{EPSILON, FPA};
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle, in millimeters
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle with its bottom-left corner at (`x`, `y`)
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Rect::try_new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns true if the interiors of `self` and `other` share a region of positive area.
    /// Rectangles that only touch along an edge or in a corner do not overlap.
    #[inline(always)]
    pub fn interiors_overlap(&self, other: &Rect) -> bool {
        ranges_overlap(self.x_min, self.x_max, other.x_min, other.x_max)
            && ranges_overlap(self.y_min, self.y_max, other.y_min, other.y_max)
    }

    /// Returns true if `self` lies inside `outer`, with a tolerance for floating point precision.
    #[inline(always)]
    pub fn almost_within(&self, outer: &Rect) -> bool {
        FPA(self.x_min) >= FPA(outer.x_min)
            && FPA(self.y_min) >= FPA(outer.y_min)
            && FPA(self.x_max) <= FPA(outer.x_max)
            && FPA(self.y_max) <= FPA(outer.y_max)
    }
}

/// Two open ranges overlap if they share more than [`EPSILON`] of their length.
#[inline(always)]
pub(crate) fn ranges_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> bool {
    a_min < b_max - EPSILON && b_min < a_max - EPSILON
}
