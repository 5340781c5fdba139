//! Outer box sizing for icons.

use serde::{Deserialize, Serialize};

/// Outer edge used when the caller does not pass a total size.
pub const DEFAULT_TOTAL_SIZE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Size of the icon plus its padding.
pub enum TotalSize {
    /// Explicit outer edge in pixels. Raised to the inner size when smaller.
    Px(u32),
    /// No explicit box; the icon sizes itself.
    Unset,
}

impl Default for TotalSize {
    fn default() -> Self {
        Self::Px(DEFAULT_TOTAL_SIZE)
    }
}

impl From<u32> for TotalSize {
    fn from(px: u32) -> Self {
        Self::Px(px)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Square outer box of an icon.
pub struct BoxSize {
    /// Edge length in pixels.
    pub edge: u32,
}

impl BoxSize {
    /// Inline `style` value.
    pub fn style(self) -> String {
        format!("height: {edge}px; width: {edge}px;", edge = self.edge)
    }
}

/// Resolves the outer box for an icon with explicit inner `size`.
///
/// Returns `None` for [`TotalSize::Unset`]. Otherwise the edge is the larger
/// of the inner size and the requested total. A zero `size` counts as unset.
pub fn resolve_box(size: Option<u32>, total: TotalSize) -> Option<BoxSize> {
    match total {
        TotalSize::Unset => None,
        TotalSize::Px(total) => Some(BoxSize {
            edge: size.filter(|px| *px > 0).unwrap_or(0).max(total),
        }),
    }
}
