#![allow(dead_code)]

use helix_wasm::render::{Canvas2d, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    BufferSize(u32, u32),
    Scale(f64),
    ClearRect(f64, f64, f64, f64),
    LineWidth(f64),
    RoundCap,
    StrokeColor(Rgba),
    FillColor(Rgba),
    GlobalAlpha(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillRect(f64, f64, f64, f64),
}

/// Canvas that records every call and tracks the current buffer size.
#[derive(Debug, Default)]
pub struct Recorder {
    pub cmds: Vec<Cmd>,
    pub buffer: (u32, u32),
}

impl Recorder {
    pub fn take(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.cmds)
    }

    pub fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }

    pub fn draws(&self) -> usize {
        self.count(|c| matches!(c, Cmd::ClearRect(..)))
    }
}

impl Canvas2d for Recorder {
    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer = (width, height);
        self.cmds.push(Cmd::BufferSize(width, height));
    }
    fn set_scale(&mut self, scale: f64) {
        self.cmds.push(Cmd::Scale(scale));
    }
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cmds.push(Cmd::ClearRect(x, y, width, height));
    }
    fn set_line_width(&mut self, width: f64) {
        self.cmds.push(Cmd::LineWidth(width));
    }
    fn set_round_line_cap(&mut self) {
        self.cmds.push(Cmd::RoundCap);
    }
    fn set_stroke_color(&mut self, color: Rgba) {
        self.cmds.push(Cmd::StrokeColor(color));
    }
    fn set_fill_color(&mut self, color: Rgba) {
        self.cmds.push(Cmd::FillColor(color));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.cmds.push(Cmd::GlobalAlpha(alpha));
    }
    fn begin_path(&mut self) {
        self.cmds.push(Cmd::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(Cmd::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(Cmd::LineTo(x, y));
    }
    fn stroke(&mut self) {
        self.cmds.push(Cmd::Stroke);
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cmds.push(Cmd::FillRect(x, y, width, height));
    }
}
