use std::time::Instant;

use anyhow::anyhow;
use eframe::egui;
use particle_backdrop::settings::{TICK_PERIOD, WINDOW_POS, WINDOW_SIZE, WINDOW_TITLE};
use particle_backdrop::{Field, PainterCanvas, TickClock, TitleCard};

struct Portfolio {
    field: Field,
    clock: TickClock,
    title_card: TitleCard,
}

impl Portfolio {
    fn new(_cc: &eframe::CreationContext) -> Self {
        let [width, height] = WINDOW_SIZE;
        Self {
            field: Field::new(width, height),
            clock: TickClock::new(TICK_PERIOD),
            title_card: TitleCard::default(),
        }
    }
}

impl eframe::App for Portfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                if self.field.resize(rect.width(), rect.height()) {
                    log::info!("canvas resized to {}x{}", rect.width(), rect.height());
                }

                self.field
                    .track_hover(ctx.input(|i| i.pointer.hover_pos()), rect);

                if self.clock.poll(Instant::now()) {
                    self.field.tick();
                }

                let painter = ui.painter_at(rect);
                self.field.render(&mut PainterCanvas::new(&painter, rect));
                self.title_card.paint(&painter, rect);
            });

        ctx.request_repaint_after(self.clock.until_next(Instant::now()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "opening \"{}\" at {:?} with size {:?}",
        WINDOW_TITLE,
        WINDOW_POS,
        WINDOW_SIZE
    );

    eframe::run_native(
        WINDOW_TITLE,
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_pos: Some(egui::Pos2::from(WINDOW_POS)),
            initial_window_size: Some(egui::Vec2::from(WINDOW_SIZE)),
            ..Default::default()
        },
        Box::new(|cc| Box::new(Portfolio::new(cc))),
    )
    .map_err(|err| anyhow!("failed to open the portfolio window: {err}"))
}
