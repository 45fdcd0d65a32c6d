use std::time::{Duration, Instant};

use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, TextureHandle, TextureOptions, Vec2, load::SizedTexture,
};
use life::Life;

use crate::{GENERATIONS_PER_SECOND, GRID_HEIGHT, GRID_WIDTH};

pub struct App {
    life: Life,
    generation: u64,
    last_step: Instant,
    step_interval: Duration,
    texture: Option<TextureHandle>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let mut life = Life::new(GRID_WIDTH, GRID_HEIGHT);
        life.seed(&mut rand::thread_rng());
        log::info!(
            "seeded a {GRID_WIDTH}x{GRID_HEIGHT} torus, stepping at {GENERATIONS_PER_SECOND}/s"
        );
        Self {
            life,
            generation: 0,
            last_step: Instant::now(),
            step_interval: Duration::from_secs_f64(1.0 / GENERATIONS_PER_SECOND),
            texture: None,
        }
    }

    // One texel per cell; the texture is scaled up to the panel, which
    // gives each cell its surface-side / grid-side footprint.
    fn frame(&self) -> ColorImage {
        let (w, h) = (self.life.width(), self.life.height());
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                pixels.push(if self.life.is_alive(x, y) {
                    Color32::BLACK
                } else {
                    Color32::WHITE
                });
            }
        }
        ColorImage::new([w, h], pixels)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if self.last_step.elapsed() >= self.step_interval {
            self.life.step();
            self.generation += 1;
            self.last_step = Instant::now();
            log::trace!("generation {}", self.generation);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let image = self.frame();
            let options = TextureOptions::NEAREST;
            let texture = match self.texture.take() {
                Some(mut t) if t.size() == image.size => {
                    t.set(image, options);
                    t
                }
                _ => ctx.load_texture("life", image, options),
            };
            let side = ui.available_size().min_elem();
            let sized_texture = SizedTexture::new(&texture, Vec2::splat(side));
            ui.add(egui::Image::new(sized_texture).fit_to_exact_size(Vec2::splat(side)));
            self.texture = Some(texture);
        });

        ctx.request_repaint_after(self.step_interval.saturating_sub(self.last_step.elapsed()));
    }
}
