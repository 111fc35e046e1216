//! Structure-of-arrays sample storage.
//!
//! Each coordinate component lives in its own array so a geometry update can
//! touch one component at a time and bulk copies from external buffers stay
//! straight slice copies. Line series store their samples in the doubled
//! "disconnected segments" layout described by [`Layout`].

mod layout;

pub use layout::Layout;

use crate::bounds::Range;
use crate::error::{ChartError, Result};

/// Fixed-capacity sample storage with `N` coordinate components.
///
/// The slot buffers are sized once from the capacity. Writes shorter than the
/// capacity replicate the last valid sample into the unused tail, so every
/// slot always holds a drawable position.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<const N: usize> {
    layout: Layout,
    columns: [Vec<f64>; N],
    capacity: usize,
    len: usize,
}

/// Two-component samples (`x`, `y`).
pub type Samples2D = Samples<2>;
/// Three-component samples (`x`, `y`, `z`).
pub type Samples3D = Samples<3>;

impl<const N: usize> Samples<N> {
    /// Allocate storage for up to `capacity` samples, initially empty.
    pub fn with_capacity(layout: Layout, capacity: usize) -> Self {
        let slots = layout.slot_count(capacity);
        Self {
            layout,
            columns: std::array::from_fn(|_| vec![0.0; slots]),
            capacity,
            len: 0,
        }
    }

    /// Build storage sized exactly to the given component arrays.
    pub fn from_columns(layout: Layout, columns: [&[f64]; N]) -> Result<Self> {
        let len = check_lengths(&columns)?;
        let mut samples = Self::with_capacity(layout, len);
        samples.write(columns, len);
        Ok(samples)
    }

    /// Overwrite the stored samples.
    ///
    /// Fails without modifying anything when the component arrays differ in
    /// length or hold more samples than the capacity.
    pub fn copy_from(&mut self, columns: [&[f64]; N]) -> Result<()> {
        let len = check_lengths(&columns)?;
        if len > self.capacity {
            return Err(ChartError::CapacityExceeded {
                capacity: self.capacity,
                requested: len,
            });
        }
        self.write(columns, len);
        Ok(())
    }

    fn write(&mut self, columns: [&[f64]; N], len: usize) {
        for (slots, values) in self.columns.iter_mut().zip(columns) {
            self.layout.scatter(values, slots);
        }
        self.len = len;
    }

    /// Storage layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Maximum number of samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of valid samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether no sample has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in each component buffer.
    pub fn slot_count(&self) -> usize {
        self.columns[0].len()
    }

    /// Raw slot buffer for one component, including padding.
    pub fn column(&self, component: usize) -> &[f64] {
        &self.columns[component]
    }

    /// Slot-space coordinates of one slot.
    pub fn slot(&self, index: usize) -> [f64; N] {
        std::array::from_fn(|c| self.columns[c][index])
    }

    /// Iterate the valid samples of one component in input order.
    pub fn values(&self, component: usize) -> impl Iterator<Item = f64> + '_ {
        let slots = &self.columns[component];
        (0..self.len).map(move |i| slots[self.layout.sample_slot(i)])
    }

    /// Range of the valid samples of one component, skipping NaN.
    pub fn range(&self, component: usize) -> Range {
        self.values(component).fold(Range::NONE, |mut range, value| {
            range.expand_to_include(value);
            range
        })
    }
}

fn check_lengths<const N: usize>(columns: &[&[f64]; N]) -> Result<usize> {
    let expected = columns.first().map_or(0, |c| c.len());
    match columns.iter().find(|c| c.len() != expected) {
        Some(column) => Err(ChartError::LengthMismatch {
            expected,
            actual: column.len(),
        }),
        None => Ok(expected),
    }
}
