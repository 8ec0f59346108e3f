// File: crates/chart-core/src/record.rs
// Summary: Surface that records drawing calls instead of rasterizing them.

use skia_safe as skia;

use crate::surface::{Surface, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(skia::Color),
    SetScale(f32),
    Line { from: skia::Point, to: skia::Point, width: f32, color: skia::Color },
    Rect { rect: skia::Rect, color: skia::Color },
    Circle { center: skia::Point, radius: f32, color: skia::Color },
    Text { text: String, at: skia::Point, size: f32, align: TextAlign, color: skia::Color },
}

/// Command log with a fixed pixel size; useful for asserting on what a frame draws.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    dpr: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// `width`/`height` are physical pixels.
    pub fn new(width: i32, height: i32, dpr: f32) -> Self {
        Self { width, height, dpr, commands: Vec::new() }
    }

    pub fn resize(&mut self, width: i32, height: i32, dpr: f32) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, e.g. between two frames.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn pixel_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn clear(&mut self, color: skia::Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_scale(&mut self, scale: f32) {
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn stroke_line(&mut self, from: skia::Point, to: skia::Point, width: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_rect(&mut self, rect: skia::Rect, color: skia::Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: skia::Point, radius: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: skia::Point, size: f32, align: TextAlign, color: skia::Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, size, align, color });
    }
}
