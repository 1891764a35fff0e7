use clockface_core::{
    ClockDimensions, ClockTime, FaceConstants, HandKind, HourHandPolicy, NumeralAlignment, Point,
    WallClock, hand_vector, numeral_positions,
};
use eframe::egui::{FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::ui::clock_theme::{ClockPalette, ClockTheme};

/// Stroke width of the rim circle.
const RIM_STROKE_WIDTH: f32 = 5.0;
/// Stroke width of the hour and minute hands.
const HAND_STROKE_WIDTH: f32 = 5.0;
/// Stroke width of the second hand.
const SECOND_HAND_STROKE_WIDTH: f32 = 2.0;
/// Radius of the filled hub dot covering the hand origins.
const HUB_RADIUS: f32 = 12.0;

/// The analog clock widget.
///
/// Holds the style constants, the two rendering policies chosen at
/// construction, the time source, and the dial geometry cached for the last
/// allocated size. All drawing is derived per frame from pure geometry; no
/// style state survives between primitives.
#[derive(Debug)]
pub(crate) struct ClockView {
    constants: FaceConstants,
    hour_policy: HourHandPolicy,
    numeral_alignment: NumeralAlignment,
    source: Box<dyn WallClock>,
    dimensions: Option<ClockDimensions>,
}

impl ClockView {
    #[must_use]
    pub(crate) fn new(
        source: Box<dyn WallClock>,
        hour_policy: HourHandPolicy,
        numeral_alignment: NumeralAlignment,
    ) -> Self {
        Self {
            constants: FaceConstants::default(),
            hour_policy,
            numeral_alignment,
            source,
            dimensions: None,
        }
    }

    /// Dial geometry for the current size, recomputed only on a size change.
    #[expect(clippy::float_cmp)] // exact match: any size change must invalidate
    fn ensure_dimensions(&mut self, width: f32, height: f32) -> ClockDimensions {
        match self.dimensions {
            Some(dims) if dims.width == width && dims.height == height => dims,
            _ => {
                let dims = ClockDimensions::compute(width, height, &self.constants);
                log::debug!("clock geometry recomputed for {width}x{height}");
                self.dimensions = Some(dims);
                dims
            }
        }
    }

    pub(crate) fn show(&mut self, ui: &mut Ui) {
        let side = ui.available_size().min_elem();
        let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());

        let dims = self.ensure_dimensions(rect.width(), rect.height());
        let time = self.source.now();
        let theme = ClockTheme::from_visuals(ui.visuals());
        let palette = theme.palette_for(ui.visuals());

        ui.painter().rect_filled(rect, 0.0, palette.face_bg);
        if dims.is_degenerate() {
            return;
        }

        draw_rim(ui, &rect, &dims, palette);
        self.draw_numerals(ui, &rect, &dims, palette);
        self.draw_hands(ui, &rect, &dims, time, palette);
        draw_hub(ui, &rect, &dims, palette);
    }

    fn draw_numerals(&self, ui: &Ui, rect: &Rect, dims: &ClockDimensions, palette: &ClockPalette) {
        let font = FontId::proportional(dims.font_size);
        for label in numeral_positions(dims) {
            let galley = ui.fonts_mut(|fonts| {
                fonts.layout_no_wrap(
                    label.numeral.label().to_owned(),
                    font.clone(),
                    palette.numeral,
                )
            });
            let origin =
                self.numeral_alignment
                    .glyph_origin(label.anchor, galley.size().x, galley.size().y);
            ui.painter()
                .galley(to_pos(rect, origin), galley, palette.numeral);
        }
    }

    fn draw_hands(
        &self,
        ui: &Ui,
        rect: &Rect,
        dims: &ClockDimensions,
        time: ClockTime,
        palette: &ClockPalette,
    ) {
        for kind in HandKind::ALL {
            let hand = hand_vector(dims, time, kind, self.hour_policy);
            let stroke = match kind {
                HandKind::Hour | HandKind::Minute => Stroke::new(HAND_STROKE_WIDTH, palette.hand),
                HandKind::Second => Stroke::new(SECOND_HAND_STROKE_WIDTH, palette.second_hand),
            };
            ui.painter()
                .line_segment([to_pos(rect, hand.origin), to_pos(rect, hand.end)], stroke);
        }
    }
}

fn draw_rim(ui: &Ui, rect: &Rect, dims: &ClockDimensions, palette: &ClockPalette) {
    ui.painter().circle_stroke(
        to_pos(rect, dims.center()),
        dims.rim_radius,
        Stroke::new(RIM_STROKE_WIDTH, palette.rim),
    );
}

fn draw_hub(ui: &Ui, rect: &Rect, dims: &ClockDimensions, palette: &ClockPalette) {
    ui.painter()
        .circle_filled(to_pos(rect, dims.center()), HUB_RADIUS, palette.hub);
}

fn to_pos(rect: &Rect, point: Point) -> Pos2 {
    rect.min + Vec2::new(point.x, point.y)
}
