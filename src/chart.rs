//! Line chart of the current list (index on X, value on Y).

use std::ops::Range;

use plotters::prelude::*;
use plotters_iced::Chart;

use crate::generator::NumberList;

const CAPTION: &str = "Generated numbers (index vs value)";

#[derive(Debug, Clone)]
pub struct NumberChart {
    values: NumberList,
}

impl NumberChart {
    pub fn render(values: &NumberList) -> Self {
        Self {
            values: values.clone(),
        }
    }

    #[cfg(test)]
    pub fn values(&self) -> &NumberList {
        &self.values
    }

    fn x_range(&self) -> Range<f64> {
        if self.values.is_empty() {
            return 0.0..10.0;
        }
        1.0..(self.values.len().max(2) as f64)
    }

    fn y_range(&self) -> Range<f64> {
        let (Some(min), Some(max)) = (self.values.iter().min(), self.values.iter().max()) else {
            return 0.0..10.0;
        };
        let (min, max) = (*min as f64, *max as f64);
        let pad = ((max - min) * 0.05).max(1.0);
        (min - pad)..(max + pad)
    }
}

impl<Message> Chart<Message> for NumberChart {
    type State = ();

    fn build_chart<DB: DrawingBackend>(&self, _state: &Self::State, mut builder: ChartBuilder<DB>) {
        let chart = builder
            .caption(CAPTION, ("sans-serif", 18).into_font())
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(self.x_range(), self.y_range());
        let mut chart = match chart {
            Ok(chart) => chart,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build chart");
                return;
            }
        };

        if let Err(e) = chart
            .configure_mesh()
            .x_desc("index")
            .y_desc("value")
            .draw()
        {
            tracing::warn!(error = %e, "failed to draw chart grid");
        }

        let points = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as f64, *v as f64));
        let series = LineSeries::new(points, BLUE.stroke_width(1)).point_size(2);
        if let Err(e) = chart.draw_series(series) {
            tracing::warn!(error = %e, "failed to draw chart series");
        }
    }
}

/// The drawing area holding at most one chart.
#[derive(Debug, Default)]
pub struct ChartSurface {
    chart: Option<NumberChart>,
}

impl ChartSurface {
    /// Mounts `chart`, handing back whatever was attached before.
    pub fn attach(&mut self, chart: NumberChart) -> Option<NumberChart> {
        self.chart.replace(chart)
    }

    pub fn detach(&mut self) -> Option<NumberChart> {
        self.chart.take()
    }

    pub fn chart(&self) -> Option<&NumberChart> {
        self.chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_replaces_previous_chart() {
        let mut surface = ChartSurface::default();
        let first = NumberList::new(vec![1, 2, 3]);
        let second = NumberList::new(vec![9]);

        assert!(surface.attach(NumberChart::render(&first)).is_none());
        let old = surface.attach(NumberChart::render(&second));

        assert_eq!(old.map(|c| c.values().clone()), Some(first));
        assert_eq!(surface.chart().map(|c| c.values().clone()), Some(second));
    }

    #[test]
    fn detach_empties_surface() {
        let mut surface = ChartSurface::default();
        surface.attach(NumberChart::render(&NumberList::new(vec![5])));
        assert!(surface.detach().is_some());
        assert!(surface.chart().is_none());
        assert!(surface.detach().is_none());
    }

    #[test]
    fn draws_caption_axes_and_markers() {
        let chart = NumberChart::render(&NumberList::new(vec![10, 500, 0, 917]));
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (640, 360)).into_drawing_area();
            <NumberChart as Chart<()>>::build_chart(&chart, &(), ChartBuilder::on(&root));
            root.present().unwrap();
        }

        assert!(svg.contains(CAPTION));
        assert!(svg.matches(">index<").count() >= 1);
        assert!(svg.matches(">value<").count() >= 1);
        assert!(svg.contains("<line"));
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn ranges_cover_all_points() {
        let chart = NumberChart::render(&NumberList::new(vec![10, 500, 1000, 0]));
        let x = chart.x_range();
        let y = chart.y_range();
        assert_eq!(x, 1.0..4.0);
        assert!(y.start < 0.0 && y.end > 1000.0);
    }

    #[test]
    fn flat_series_still_has_height() {
        let chart = NumberChart::render(&NumberList::new(vec![42]));
        let y = chart.y_range();
        assert!(y.start < 42.0 && y.end > 42.0);
        assert_eq!(chart.x_range(), 1.0..2.0);
    }
}
