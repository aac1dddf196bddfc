use eframe::egui::{self, Align2, FontId, Painter, Rect};

use crate::settings::{
    SUBTITLE_COLOR, SUBTITLE_SIZE, SUBTITLE_TEXT, TITLE_COLOR, TITLE_SIZE, TITLE_TEXT,
};

pub struct TitleCard {
    title: &'static str,
    subtitle: &'static str,
}

impl Default for TitleCard {
    fn default() -> Self {
        Self {
            title: TITLE_TEXT,
            subtitle: SUBTITLE_TEXT,
        }
    }
}

impl TitleCard {
    /// Title sits just above the vertical center of `rect`, subtitle just below.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let center = rect.center();
        painter.text(
            center,
            Align2::CENTER_BOTTOM,
            self.title,
            FontId::proportional(TITLE_SIZE),
            TITLE_COLOR,
        );
        painter.text(
            center + egui::vec2(0.0, 4.0),
            Align2::CENTER_TOP,
            self.subtitle,
            FontId::proportional(SUBTITLE_SIZE),
            SUBTITLE_COLOR,
        );
    }
}
