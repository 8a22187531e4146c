use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Panel identifier: hosts address panels by number or by string, and both
/// travel through JSON unchanged. `Ord` so id-keyed maps iterate
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelId {
    Number(i64),
    Text(String),
}

impl From<i64> for PanelId {
    fn from(id: i64) -> Self {
        PanelId::Number(id)
    }
}

impl From<i32> for PanelId {
    fn from(id: i32) -> Self {
        PanelId::Number(id as i64)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        PanelId::Text(id.to_string())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        PanelId::Text(id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::Number(n) => write!(f, "{n}"),
            PanelId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Axis-aligned cell region, the geometry-only view of a panel. Coordinates
/// are grid cells; the occupied area is the half-open span
/// `[x, x + w) x [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// A panel's cell region plus identity and lock flags. Positions are
/// top-left origins with `y` growing downward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelCoordinate {
    pub id: PanelId,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    /// The panel may not be moved, neither by the user nor by displacement.
    #[serde(default)]
    pub lock_position: bool,
    /// The panel may not be resized by the user. It can still be moved.
    #[serde(default)]
    pub lock_size: bool,
}

impl PanelCoordinate {
    pub fn new(id: impl Into<PanelId>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            lock_position: false,
            lock_size: false,
        }
    }

    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.w, self.h)
    }
}

/// Working collection keyed by panel id.
pub type PanelMap = BTreeMap<PanelId, PanelCoordinate>;
