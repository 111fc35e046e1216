/// How samples are laid out in slot buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One slot per sample.
    Points,
    /// Consecutive slot pairs form independent segments: sample `i` ends
    /// segment `i - 1` and starts segment `i`, so interior samples appear
    /// twice and `n` samples fill `2 * (n - 1)` slots.
    Segments,
}

impl Layout {
    /// Number of slots needed for `samples` samples.
    pub fn slot_count(self, samples: usize) -> usize {
        match self {
            Self::Points => samples,
            // A lone sample still gets a slot so its position is stored.
            Self::Segments if samples < 2 => samples,
            Self::Segments => 2 * (samples - 1),
        }
    }

    /// Slot holding the first copy of sample `index`.
    pub fn sample_slot(self, index: usize) -> usize {
        match self {
            Self::Points => index,
            Self::Segments if index == 0 => 0,
            Self::Segments => 2 * index - 1,
        }
    }

    /// Write `values` into `slots` and pad the tail with the last value.
    ///
    /// `slots` must be large enough for `values.len()` samples. An empty
    /// `values` leaves `slots` untouched.
    pub(crate) fn scatter(self, values: &[f64], slots: &mut [f64]) {
        let Some(&last) = values.last() else {
            return;
        };
        let used = match self {
            Self::Points => {
                slots[..values.len()].copy_from_slice(values);
                values.len()
            }
            Self::Segments => {
                slots[0] = values[0];
                for (pair, window) in slots[1..].chunks_mut(2).zip(values.windows(2)) {
                    pair[0] = window[1];
                    if let Some(start) = pair.get_mut(1) {
                        *start = window[1];
                    }
                }
                self.slot_count(values.len())
            }
        };
        slots[used..].fill(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_slots_reference_each_sample() {
        let layout = Layout::Segments;
        assert_eq!(layout.slot_count(0), 0);
        assert_eq!(layout.slot_count(1), 1);
        assert_eq!(layout.slot_count(3), 4);
        assert_eq!(
            (0..4).map(|i| layout.sample_slot(i)).collect::<Vec<_>>(),
            vec![0, 1, 3, 5]
        );
    }
}
