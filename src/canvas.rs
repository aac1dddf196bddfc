use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

/// Drawing surface the field renders onto, in canvas-local coordinates.
pub trait Canvas {
    fn fill(&mut self, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32);
    fn circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Paints through an egui painter onto `rect`, whose top-left corner is the
/// canvas origin.
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        local_to_screen(self.rect, local)
    }
}

/// Maps a canvas-local point into screen space for a canvas placed at `rect`.
pub fn local_to_screen(rect: Rect, local: Pos2) -> Pos2 {
    rect.min + local.to_vec2()
}

/// Canvas-local position of a screen point, or `None` outside `rect`.
pub fn screen_to_local(rect: Rect, screen: Pos2) -> Option<Pos2> {
    rect.contains(screen).then(|| (screen - rect.min).to_pos2())
}

impl Canvas for PainterCanvas<'_> {
    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }
}
