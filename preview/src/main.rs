//! Desktop preview for the ring animator
//!
//! Renders both rings in a window and maps the keyboard onto the physical
//! inputs:
//! - Space: external button
//! - Enter: encoder button (hold for the long-press reset)
//! - Left/Right arrows: one encoder detent

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use ring_animator::{
    AnimationId, Controller, ControllerConfig, FrameSurface, InputLevels, Instant, OutputDriver,
    Rgb, Selection, config::RING_LEDS, input::QuadratureDecoder,
};

/// Radius of each LED dot in pixels
const LED_RADIUS: f32 = 9.0;

/// Radius of the ring the LEDs sit on
const RING_RADIUS: f32 = 90.0;

/// Gap between the two rings
const RING_GAP: f32 = 60.0;

/// Selection shared with the simulated encoder, as on the device
static SELECTION: Selection = Selection::catalog(0);

/// Keeps the last frame written by the surface
#[derive(Default)]
struct ScreenDriver {
    colors: Vec<Rgb>,
}

impl OutputDriver for ScreenDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.colors.clear();
        self.colors.extend_from_slice(colors);
    }
}

type PreviewSurface = FrameSurface<ScreenDriver, ScreenDriver, RING_LEDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 380.0])
            .with_title("Ring Animator Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ring-animator-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    controller: Controller<'static, PreviewSurface>,
    /// Wall-clock reference for synthetic time
    last_frame: StdInstant,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let surface = FrameSurface::new(ScreenDriver::default(), ScreenDriver::default());
        Self {
            controller: Controller::new(&SELECTION, surface, &ControllerConfig::default()),
            last_frame: StdInstant::now(),
            t_ms: 0,
            time_scale: 1.0,
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = if delta_ms_f64.is_finite() {
            delta_ms_f64.max(0.0) as u64
        } else {
            0
        };
        self.t_ms = self.t_ms.wrapping_add(delta_ms);
    }

    fn read_inputs(ctx: &egui::Context) -> InputLevels {
        ctx.input(|input| {
            // One detent per key press; the pin levels pick the direction.
            if input.key_pressed(egui::Key::ArrowRight) {
                SELECTION.apply_step(QuadratureDecoder::decode(true, false));
            }
            if input.key_pressed(egui::Key::ArrowLeft) {
                SELECTION.apply_step(QuadratureDecoder::decode(true, true));
            }
            InputLevels {
                button: input.key_down(egui::Key::Space),
                encoder_button: input.key_down(egui::Key::Enter),
            }
        })
    }

    fn paint_ring(painter: &egui::Painter, center: egui::Pos2, colors: &[Rgb]) {
        #[allow(clippy::cast_precision_loss)]
        let count = colors.len().max(1) as f32;
        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in colors.iter().enumerate() {
            let angle = i as f32 / count * std::f32::consts::TAU;
            let pos = center + egui::vec2(angle.sin(), -angle.cos()) * RING_RADIUS;
            painter.circle_filled(
                pos,
                LED_RADIUS,
                egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b),
            );
            painter.circle_stroke(
                pos,
                LED_RADIUS,
                egui::Stroke::new(1.0, egui::Color32::from_gray(60)),
            );
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let levels = Self::read_inputs(ctx);
        let active = self.controller.tick(Instant::from_millis(self.t_ms), levels);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let name = active.map_or("off", AnimationId::as_str);
                ui.label(format!("Animation {}: {name}", SELECTION.get()));

                ui.add_space(16.0);

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });

            ui.label("Space: button   Enter: encoder button   \u{2190}/\u{2192}: encoder");

            ui.add_space(16.0);

            let size = egui::vec2(
                4.0 * (RING_RADIUS + LED_RADIUS) + RING_GAP,
                2.0 * (RING_RADIUS + LED_RADIUS),
            );
            let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let origin = response.rect.min;
            let offset = RING_RADIUS + LED_RADIUS;

            let (left, right) = self.controller.surface().drivers();
            Self::paint_ring(&painter, origin + egui::vec2(offset, offset), &left.colors);
            Self::paint_ring(
                &painter,
                origin + egui::vec2(3.0 * offset + RING_GAP, offset),
                &right.colors,
            );
        });
    }
}
