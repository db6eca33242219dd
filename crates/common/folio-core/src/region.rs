use std::{fmt, str::FromStr};

use crate::FolioError;

/// Screen rectangle in global desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds a region from two sampled corners. The corners may be given in
    /// any order; the result always has its origin at the top-left.
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        let left = a.0.min(b.0);
        let top = a.1.min(b.1);
        Self {
            left,
            top,
            width: a.0.abs_diff(b.0),
            height: a.1.abs_diff(b.1),
        }
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add_unsigned(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add_unsigned(self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.left.saturating_add_unsigned(self.width / 2),
            self.top.saturating_add_unsigned(self.height / 2),
        )
    }

    /// Right and bottom edges are exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.width, self.height
        )
    }
}

impl FromStr for Region {
    type Err = FolioError;

    /// Parses `left,top,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [left, top, width, height] = parts.as_slice() else {
            return Err(FolioError::invalid_config(format!(
                "region '{s}' must have the form left,top,width,height"
            )));
        };

        let coordinate = |value: &str| {
            value
                .parse::<i32>()
                .map_err(|_| {
                    FolioError::invalid_config(format!("invalid region coordinate '{value}'"))
                })
        };
        let extent = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| FolioError::invalid_config(format!("invalid region extent '{value}'")))
        };

        Ok(Self::new(
            coordinate(*left)?,
            coordinate(*top)?,
            extent(*width)?,
            extent(*height)?,
        ))
    }
}

/// Size of the main display in the same coordinate space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}
