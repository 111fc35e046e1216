//! Fixed-size colormap lookup tables.
//!
//! Every palette is a [`MAP_SIZE`]-entry table built once per process from a
//! closed-form formula and shared read-only afterwards.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Number of entries in every colormap table.
pub const MAP_SIZE: usize = 64;

type Table = [Color; MAP_SIZE];

/// Named colormap palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Colormap {
    /// Magenta to yellow.
    Spring,
    /// Green to yellow.
    Summer,
    /// Red to yellow.
    Autumn,
    /// Blue to green.
    Winter,
    /// Black to white.
    Gray,
    /// Black through red and yellow to white.
    Hot,
    /// Cyan to magenta.
    Cool,
    /// Dark blue through cyan and yellow to dark red.
    #[default]
    Jet,
}

struct Tables {
    spring: Table,
    summer: Table,
    autumn: Table,
    winter: Table,
    gray: Table,
    hot: Table,
    cool: Table,
    jet: Table,
}

static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables {
    spring: build(spring),
    summer: build(summer),
    autumn: build(autumn),
    winter: build(winter),
    gray: build(gray),
    hot: build(hot),
    cool: build(cool),
    jet: build(jet),
});

impl Colormap {
    /// All palettes, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
        Self::Gray,
        Self::Hot,
        Self::Cool,
        Self::Jet,
    ];

    /// Access the full lookup table.
    pub fn table(self) -> &'static [Color; MAP_SIZE] {
        let tables = &*TABLES;
        match self {
            Self::Spring => &tables.spring,
            Self::Summer => &tables.summer,
            Self::Autumn => &tables.autumn,
            Self::Winter => &tables.winter,
            Self::Gray => &tables.gray,
            Self::Hot => &tables.hot,
            Self::Cool => &tables.cool,
            Self::Jet => &tables.jet,
        }
    }

    /// Table index for `value` within `[min, max]`, clamped into the table.
    ///
    /// A zero-span range selects the middle entry. NaN selects entry 0.
    pub fn index_of(value: f64, min: f64, max: f64) -> usize {
        let span = max - min;
        let t = if span > 0.0 && span.is_finite() {
            (value - min) / span
        } else {
            0.5
        };
        index_norm(t)
    }

    /// Look up the color for `value` within `[min, max]`.
    pub fn color_at(self, value: f64, min: f64, max: f64) -> Color {
        self.table()[Self::index_of(value, min, max)]
    }

    /// Look up the color for a value already normalized into `[0, 1]`.
    pub fn color_norm(self, t: f32) -> Color {
        self.table()[index_norm(f64::from(t))]
    }
}

fn index_norm(t: f64) -> usize {
    // `as` saturates: NaN and negatives land on 0.
    let index = ((MAP_SIZE - 1) as f64 * t).floor() as usize;
    index.min(MAP_SIZE - 1)
}

fn build(entry: fn(usize) -> [u8; 3]) -> Table {
    std::array::from_fn(|i| {
        let [r, g, b] = entry(i);
        Color::from_rgb8(r, g, b)
    })
}

fn lerp(i: usize) -> f64 {
    i as f64 / MAP_SIZE as f64
}

fn channel(value: f64) -> u8 {
    (255.0 * value) as u8
}

fn spring(i: usize) -> [u8; 3] {
    let g = channel(lerp(i));
    [255, g, 255 - g]
}

fn summer(i: usize) -> [u8; 3] {
    let t = lerp(i);
    [channel(t), channel(0.5 * (1.0 + t)), (255.0 - 0.4) as u8]
}

fn autumn(i: usize) -> [u8; 3] {
    [255, channel(lerp(i)), 0]
}

fn winter(i: usize) -> [u8; 3] {
    let t = lerp(i);
    [0, channel(t), channel(1.0 - 0.5 * t)]
}

fn gray(i: usize) -> [u8; 3] {
    let v = channel(lerp(i));
    [v, v, v]
}

fn hot(n: usize) -> [u8; 3] {
    let size = MAP_SIZE as f64;
    let n1 = (3.0 * size / 8.0) as usize;
    let i = ((size - 1.0) * lerp(n)) as usize;
    let ramp = |offset: usize, len: f64| (i + 1 - offset) as f64 / len;

    let red = if i < n1 { ramp(0, n1 as f64) } else { 1.0 };
    let green = if i < n1 {
        0.0
    } else if i < 2 * n1 {
        ramp(n1, n1 as f64)
    } else {
        1.0
    };
    let blue = if i < 2 * n1 {
        0.0
    } else {
        ramp(2 * n1, size - 2.0 * n1 as f64)
    };
    [channel(red), channel(green), channel(blue)]
}

fn cool(n: usize) -> [u8; 3] {
    let i = ((MAP_SIZE - 1) as f64 * lerp(n)) as usize;
    let t = i as f64 / (MAP_SIZE as f64 - 1.0);
    [channel(t), channel(1.0 - t), 255]
}

/// Classic jet: three overlapping trapezoids offset by a quarter table.
fn jet(i: usize) -> [u8; 3] {
    let n = MAP_SIZE.div_ceil(4);
    let ramp_len = 3 * n - 1;
    let ramp = |k: usize| -> f64 {
        if k < n {
            (k + 1) as f64 / n as f64
        } else if k < 2 * n - 1 {
            1.0
        } else {
            (3 * n - 1 - k) as f64 / n as f64
        }
    };

    // Start of the green trapezoid; red trails it by `n`, blue leads it.
    let green_start = n.div_ceil(2);
    let red_start = green_start + n;
    let blue_lead = n - green_start;

    let red = (red_start..red_start + ramp_len)
        .contains(&i)
        .then(|| ramp(i - red_start));
    let green = (green_start..green_start + ramp_len)
        .contains(&i)
        .then(|| ramp(i - green_start));
    let blue = (i + blue_lead < ramp_len).then(|| ramp(i + blue_lead));

    [
        channel(red.unwrap_or(0.0)),
        channel(green.unwrap_or(0.0)),
        channel(blue.unwrap_or(0.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jet_extremes_hit_first_and_last_entries() {
        let table = Colormap::Jet.table();
        assert_eq!(Colormap::Jet.color_at(-3.0, -3.0, 7.0), table[0]);
        assert_eq!(Colormap::Jet.color_at(7.0, -3.0, 7.0), table[MAP_SIZE - 1]);
    }

    #[test]
    fn jet_runs_from_dark_blue_to_dark_red() {
        let table = Colormap::Jet.table();
        assert_eq!(table[0], Color::from_rgb8(0, 0, 143));
        assert_eq!(table[MAP_SIZE - 1], Color::from_rgb8(127, 0, 0));
        assert_eq!(table[24], Color::from_rgb8(15, 255, 239));
    }

    #[test]
    fn lookup_index_stays_in_table() {
        for step in 0..=200 {
            let value = -1.0 + 2.0 * step as f64 / 200.0;
            let index = Colormap::index_of(value, -1.0, 1.0);
            assert!(index < MAP_SIZE);
        }
        assert_eq!(Colormap::index_of(5.0, -1.0, 1.0), MAP_SIZE - 1);
        assert_eq!(Colormap::index_of(-5.0, -1.0, 1.0), 0);
        assert_eq!(Colormap::index_of(f64::NAN, -1.0, 1.0), 0);
    }

    #[test]
    fn degenerate_range_selects_middle_entry() {
        assert_eq!(Colormap::index_of(2.0, 2.0, 2.0), (MAP_SIZE - 1) / 2);
        assert_eq!(
            Colormap::Hot.color_at(2.0, 2.0, 2.0),
            Colormap::Hot.color_norm(0.5)
        );
    }

    #[test]
    fn palette_formulas() {
        assert_eq!(Colormap::Gray.table()[0], Color::from_rgb8(0, 0, 0));
        assert_eq!(Colormap::Spring.table()[0], Color::from_rgb8(255, 0, 255));
        assert_eq!(Colormap::Summer.table()[0], Color::from_rgb8(0, 127, 254));
        assert_eq!(Colormap::Autumn.table()[32], Color::from_rgb8(255, 127, 0));
        assert_eq!(Colormap::Winter.table()[0], Color::from_rgb8(0, 0, 255));
        assert_eq!(Colormap::Cool.table()[0], Color::from_rgb8(0, 255, 255));
        assert_eq!(Colormap::Hot.table()[0], Color::from_rgb8(10, 0, 0));
        assert_eq!(
            Colormap::Hot.table()[MAP_SIZE - 1],
            Color::from_rgb8(255, 255, 239)
        );
    }

    #[test]
    fn every_palette_is_built() {
        for colormap in Colormap::ALL {
            assert_eq!(colormap.table().len(), MAP_SIZE);
        }
    }
}
