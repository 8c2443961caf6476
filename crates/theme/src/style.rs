use crate::colors::Color;

/// Colors used by the history chart canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Plot-area fill.
    pub background: Color,
    pub grid:       Color,
    pub cpu:        Color,
    pub memory:     Color,
}
