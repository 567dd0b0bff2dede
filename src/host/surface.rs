use serde::{Deserialize, Serialize};

/// Pixel size of a drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Host element able to carry one rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    pub viewport: Viewport,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            id: id.into(),
            viewport,
        }
    }
}
