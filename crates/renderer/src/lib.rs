//! Drawing for the CPU / memory history chart.
//!
//! The chart is a plain iced canvas: X spans the full history capacity (one
//! slot per tick), Y is fixed to 0 – 100 %.  Each series is drawn straight
//! from the aggregator's snapshot; no values are derived from rendered text.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme};
use perfmon_core::{HistoryAggregator, MetricId};
use perfmon_theme::ChartStyle;

/// Horizontal grid lines, in percent.
const GRID_LEVELS: [f64; 3] = [25.0, 50.0, 75.0];

/// Canvas program holding one frame's worth of series data.
#[derive(Debug, Clone)]
pub struct HistoryChart {
    cpu:      Vec<f64>,
    memory:   Vec<f64>,
    capacity: usize,
    style:    ChartStyle,
}

impl HistoryChart {
    pub fn new(history: &HistoryAggregator, style: ChartStyle) -> Self {
        Self {
            cpu:      history.snapshot(MetricId::Cpu),
            memory:   history.snapshot(MetricId::Memory),
            capacity: history.capacity(),
            style,
        }
    }
}

impl<Message> canvas::Program<Message> for HistoryChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        frame.fill_rectangle(Point::ORIGIN, size, self.style.background.to_iced());

        for level in GRID_LEVELS {
            let y = value_to_y(level, size.height);
            let line = Path::line(Point::new(0.0, y), Point::new(size.width, y));
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(self.style.grid.to_iced()),
            );
        }

        for (series, color) in [(&self.memory, self.style.memory), (&self.cpu, self.style.cpu)] {
            if let Some(path) = series_path(series, self.capacity, size) {
                frame.stroke(
                    &path,
                    Stroke::default().with_width(1.5).with_color(color.to_iced()),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

fn series_path(samples: &[f64], capacity: usize, size: Size) -> Option<Path> {
    let points = chart_points(samples, capacity, size);
    if points.len() < 2 {
        return None;
    }
    Some(Path::new(|builder| {
        builder.move_to(points[0]);
        for p in &points[1..] {
            builder.line_to(*p);
        }
    }))
}

/// Map samples to canvas coordinates.  Sample `i` sits at `i / capacity` of
/// the width; values are clamped to `[0, 100]` before scaling.
pub fn chart_points(samples: &[f64], capacity: usize, size: Size) -> Vec<Point> {
    let slots = capacity.max(1) as f32;
    samples
        .iter()
        .enumerate()
        .map(|(i, v)| Point::new(i as f32 / slots * size.width, value_to_y(*v, size.height)))
        .collect()
}

fn value_to_y(value: f64, height: f32) -> f32 {
    let clamped = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    height - (clamped as f32 / 100.0) * height
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size { width: 360.0, height: 100.0 };

    #[test]
    fn x_spans_capacity() {
        let pts = chart_points(&[0.0, 0.0, 0.0], 36, SIZE);
        assert_eq!(pts[0].x, 0.0);
        assert_eq!(pts[1].x, 10.0);
        assert_eq!(pts[2].x, 20.0);
    }

    #[test]
    fn y_is_inverted_percentage() {
        let pts = chart_points(&[0.0, 50.0, 100.0], 3, SIZE);
        assert_eq!(pts[0].y, 100.0);
        assert_eq!(pts[1].y, 50.0);
        assert_eq!(pts[2].y, 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let pts = chart_points(&[-20.0, 250.0, f64::NAN], 3, SIZE);
        assert_eq!(pts[0].y, 100.0);
        assert_eq!(pts[1].y, 0.0);
        assert_eq!(pts[2].y, 100.0);
    }

    #[test]
    fn chart_copies_history() {
        let mut history = HistoryAggregator::new(3);
        history.record(MetricId::Cpu, 10.0);
        history.record(MetricId::Memory, 20.0);
        let chart = HistoryChart::new(&history, perfmon_theme::Theme::default().chart_style());

        history.record(MetricId::Cpu, 99.0);
        assert_eq!(chart.cpu, vec![10.0]);
        assert_eq!(chart.memory, vec![20.0]);
        assert_eq!(chart.capacity, 3);
    }

    #[test]
    fn single_point_draws_no_line() {
        assert!(series_path(&[42.0], 10, SIZE).is_none());
    }
}
