use serde::{Deserialize, Serialize};

use super::transition::Interpolate;

/// Canvas margins around the chart group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 40.0,
            bottom: 30.0,
            left: 120.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Mark geometry (chart-group coordinates, y grows downward)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Interpolate for BarGeometry {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, t),
            y: self.y.interpolate(&to.y, t),
            width: self.width.interpolate(&to.width, t),
            height: self.height.interpolate(&to.height, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelGeometry {
    /// Horizontal centre of the text.
    pub x: f64,
    /// Top of the text.
    pub y: f64,
}

impl Interpolate for LabelGeometry {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            x: self.x.interpolate(&to.x, t),
            y: self.y.interpolate(&to.y, t),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Fixed band layout derived from the canvas size.
///
/// Each visible country gets one band along x holding its two bars; bars
/// grow upward from the baseline at `chart_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: Padding,
    pub chart_width: f64,
    pub chart_height: f64,
    pub band: f64,
    pub bar_spacing: f64,
    pub bar_width: f64,
    pub label_offset: f64,
}

impl Layout {
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        padding: Padding,
        bands: usize,
        label_offset: f64,
    ) -> Self {
        let chart_width = canvas_width - padding.left - padding.right;
        let chart_height = canvas_height - padding.top - padding.bottom;
        let band = chart_height / bands.max(1) as f64;
        let bar_spacing = band * 0.2;
        let bar_width = band * 0.35 - bar_spacing / 2.0;
        Self {
            canvas_width,
            canvas_height,
            padding,
            chart_width,
            chart_height,
            band,
            bar_spacing,
            bar_width,
            label_offset,
        }
    }

    /// y of the shared bar baseline.
    pub fn baseline(&self) -> f64 {
        self.chart_height
    }

    pub fn bar_a_x(&self, index: usize) -> f64 {
        index as f64 * self.band
    }

    pub fn bar_b_x(&self, index: usize) -> f64 {
        self.bar_a_x(index) + self.bar_width + self.bar_spacing
    }

    /// Bar standing on the baseline with the given pixel length.
    pub fn bar(&self, x: f64, length: f64) -> BarGeometry {
        BarGeometry {
            x,
            y: self.baseline() - length,
            width: self.bar_width,
            height: length,
        }
    }

    /// Zero-length bar on the baseline, where entering bars start.
    pub fn collapsed_bar(&self, x: f64) -> BarGeometry {
        self.bar(x, 0.0)
    }

    pub fn label(&self, index: usize) -> LabelGeometry {
        LabelGeometry {
            x: index as f64 * self.band + self.band / 2.0,
            y: self.baseline() + self.label_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        // chart area 400 × 200, band = 10
        let padding = Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        };
        Layout::new(400.0, 200.0, padding, 20, 15.0)
    }

    #[test]
    fn band_and_bar_widths() {
        let l = layout();
        assert_eq!(l.band, 10.0);
        assert_eq!(l.bar_spacing, 2.0);
        assert_eq!(l.bar_width, 2.5);
    }

    #[test]
    fn bars_are_placed_by_index() {
        let l = layout();
        assert_eq!(l.bar_a_x(3), 30.0);
        assert_eq!(l.bar_b_x(3), 30.0 + 2.5 + 2.0);
        assert_eq!(l.label(3), LabelGeometry { x: 35.0, y: 215.0 });
    }

    #[test]
    fn bars_grow_up_from_baseline() {
        let l = layout();
        let bar = l.bar(0.0, 50.0);
        assert_eq!(bar.y, 150.0);
        assert_eq!(bar.y + bar.height, l.baseline());
        let collapsed = l.collapsed_bar(10.0);
        assert_eq!((collapsed.y, collapsed.height), (200.0, 0.0));
    }

    #[test]
    fn default_padding_shrinks_chart_area() {
        let l = Layout::new(1000.0, 960.0, Padding::default(), 20, 15.0);
        assert_eq!(l.chart_width, 840.0);
        assert_eq!(l.chart_height, 870.0);
    }
}
