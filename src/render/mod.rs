//! Rendering primitives and the canvas capability.
//!
//! These types are backend-agnostic. Charts issue their draw buffers to a
//! [`Canvas`]; render backends (such as the GPUI backend) implement it.
//! [`RenderList`] is a recording canvas that can be replayed later.

mod canvas;

pub use canvas::Canvas;

use std::any::Any;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::geom::ScreenPoint;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Convert back to 8-bit channels, alpha last.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Light gray used for grid lines.
    pub const SILVER: Self = Self::from_rgb8(192, 192, 192);
    /// Opaque red.
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::from_rgb8(0, 0, 255);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a line style.
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 2.0,
        }
    }
}

/// Marker shape for point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    /// Circle marker.
    Circle,
    /// Square marker.
    Square,
    /// Cross marker.
    Cross,
}

/// Marker styling for point series.
///
/// Marker sizes are expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker size in pixels.
    pub size: f32,
    /// Marker shape.
    pub shape: MarkerShape,
}

impl MarkerStyle {
    /// Create a circular marker style.
    pub const fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            shape: MarkerShape::Circle,
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 2.0,
            shape: MarkerShape::Square,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 16.0,
        }
    }
}

/// Opaque image resource supplied by the host.
///
/// The chart core never decodes or inspects the image; it only passes the
/// handle back to the canvas. Backends downcast to their own image type.
#[derive(Clone)]
pub struct ImageHandle(Arc<dyn Any + Send + Sync>);

impl ImageHandle {
    /// Wrap a backend image.
    pub fn new<T: Any + Send + Sync>(image: T) -> Self {
        Self(Arc::new(image))
    }

    /// Access the backend image if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Check whether two handles refer to the same image.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageHandle(..)")
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Disconnected line segments; consecutive point pairs form one segment.
    LineSegments {
        /// Segment endpoints.
        points: Vec<ScreenPoint>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Point sprites.
    Points {
        /// Sprite centers.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Text anchored at its baseline start.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
    /// Indexed triangle mesh with per-vertex colors.
    Mesh {
        /// Vertex positions.
        positions: Vec<ScreenPoint>,
        /// One color per vertex.
        colors: Vec<Color>,
        /// Triangle list indices into `positions`.
        indices: Vec<u32>,
    },
    /// Host image drawn with its top-left corner at `position`.
    Image {
        /// Image handle.
        image: ImageHandle,
        /// Image position.
        position: ScreenPoint,
    },
}

/// Two triangles covering the quad whose corners start at `base`.
///
/// Corners are ordered around the quad; both triangles share the `1-3`
/// diagonal and keep the same winding.
pub fn quad_indices(base: u32) -> [u32; 6] {
    [base, base + 1, base + 3, base + 3, base + 1, base + 2]
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue every recorded command to another canvas, in order.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                RenderCommand::LineSegments { points, style } => {
                    canvas.draw_segments(points, style);
                }
                RenderCommand::Points { points, style } => canvas.draw_points(points, style),
                RenderCommand::Text {
                    position,
                    text,
                    style,
                } => canvas.draw_text(text, *position, style),
                RenderCommand::Mesh {
                    positions,
                    colors,
                    indices,
                } => canvas.draw_mesh(positions, colors, indices),
                RenderCommand::Image { image, position } => canvas.draw_image(image, *position),
            }
        }
    }
}

impl Canvas for RenderList {
    fn draw_segments(&mut self, points: &[ScreenPoint], style: &LineStyle) {
        self.push(RenderCommand::LineSegments {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn draw_points(&mut self, points: &[ScreenPoint], style: &MarkerStyle) {
        self.push(RenderCommand::Points {
            points: points.to_vec(),
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, style: &TextStyle) {
        self.push(RenderCommand::Text {
            position,
            text: text.to_string(),
            style: *style,
        });
    }

    fn draw_mesh(&mut self, positions: &[ScreenPoint], colors: &[Color], indices: &[u32]) {
        self.push(RenderCommand::Mesh {
            positions: positions.to_vec(),
            colors: colors.to_vec(),
            indices: indices.to_vec(),
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, position: ScreenPoint) {
        self.push(RenderCommand::Image {
            image: image.clone(),
            position,
        });
    }
}
