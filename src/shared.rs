//! Cross-thread chart handle.
//!
//! A UI thread drawing a chart and a worker thread streaming samples into it
//! must not interleave iteration over the series list with attach/detach.
//! [`SharedChart`] serializes them behind one reader-writer lock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::render::{Canvas, RenderList};
use crate::{Chart2D, Chart3D};

/// Shared, lockable handle to a chart.
///
/// Cloning the handle shares the same chart.
#[derive(Debug)]
pub struct SharedChart<C> {
    chart: Arc<RwLock<C>>,
}

impl<C> Clone for SharedChart<C> {
    fn clone(&self) -> Self {
        Self {
            chart: Arc::clone(&self.chart),
        }
    }
}

impl<C> SharedChart<C> {
    /// Wrap a chart.
    pub fn new(chart: C) -> Self {
        Self {
            chart: Arc::new(RwLock::new(chart)),
        }
    }

    /// Read the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let chart = self.chart.read();
        f(&chart)
    }

    /// Mutate the chart state.
    ///
    /// The chart is locked exclusively for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut chart = self.chart.write();
        f(&mut chart)
    }
}

impl<C: Chart> SharedChart<C> {
    /// Draw under a read lock.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.read(|chart| chart.draw(canvas));
    }

    /// Record the chart under a read lock.
    pub fn render(&self) -> RenderList {
        self.read(|chart| {
            let mut list = RenderList::new();
            chart.draw(&mut list);
            list
        })
    }

    /// Resize under a write lock, skipping the rebuild when nothing changed.
    pub fn resize(&self, width: f32, height: f32) {
        if self.read(|chart| chart.size()) != (width, height) {
            self.write(|chart| chart.set_size(width, height));
        }
    }
}

/// Operations shared by 2D and 3D charts.
pub trait Chart: Send + Sync {
    /// Viewport size in pixels.
    fn size(&self) -> (f32, f32);

    /// Resize the viewport and rebuild.
    fn set_size(&mut self, width: f32, height: f32);

    /// Issue the chart to a canvas.
    fn draw(&self, canvas: &mut impl Canvas);
}

impl Chart for Chart2D {
    fn size(&self) -> (f32, f32) {
        Chart2D::size(self)
    }

    fn set_size(&mut self, width: f32, height: f32) {
        Chart2D::set_size(self, width, height);
    }

    fn draw(&self, canvas: &mut impl Canvas) {
        Chart2D::draw(self, canvas);
    }
}

impl Chart for Chart3D {
    fn size(&self) -> (f32, f32) {
        Chart3D::size(self)
    }

    fn set_size(&mut self, width: f32, height: f32) {
        Chart3D::set_size(self, width, height);
    }

    fn draw(&self, canvas: &mut impl Canvas) {
        Chart3D::draw(self, canvas);
    }
}

impl<C> From<C> for SharedChart<C> {
    fn from(chart: C) -> Self {
        Self::new(chart)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::render::Color;
    use crate::series::Series2D;

    #[test]
    fn writer_thread_and_reader_see_consistent_series() {
        let shared = SharedChart::new(Chart2D::new());
        let id = shared.write(|chart| chart.attach(Series2D::line_with_capacity(64, Color::BLUE)));

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for n in 1..=32 {
                    let x: Vec<f64> = (0..n).map(f64::from).collect();
                    let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
                    shared
                        .write(|chart| chart.copy_values(id, &x, &y))
                        .expect("fits");
                }
            })
        };

        for _ in 0..32 {
            shared.resize(640.0, 480.0);
            let list = shared.render();
            assert!(!list.commands().is_empty());
        }
        writer.join().expect("writer thread");

        let bounds = shared.read(|chart| chart.bounds());
        assert_eq!(bounds.x.max, 31.0);
        assert_eq!(bounds.y.max, 62.0);
        assert_eq!(shared.read(|chart| chart.size()), (640.0, 480.0));
    }
}
