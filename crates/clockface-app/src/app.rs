//! Application shell hosting the clock widget.

use std::time::Duration;

use clockface_core::{HourHandPolicy, NumeralAlignment, SystemClock};
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use egui_extras::{Size, StripBuilder};

use crate::ui::clock::ClockView;

/// Fixed delay between animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub(crate) struct ClockfaceApp {
    clock: ClockView,
}

impl ClockfaceApp {
    pub(crate) fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            clock: ClockView::new(
                Box::new(SystemClock),
                HourHandPolicy::default(),
                NumeralAlignment::default(),
            ),
        }
    }
}

impl App for ClockfaceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            let side = ui.available_size().min_elem();

            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(side))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.empty();
                    strip.cell(|ui| {
                        StripBuilder::new(ui)
                            .size(Size::remainder())
                            .size(Size::exact(side))
                            .size(Size::remainder())
                            .vertical(|mut strip| {
                                strip.empty();
                                strip.cell(|ui| {
                                    self.clock.show(ui);
                                });
                                strip.empty();
                            });
                    });
                    strip.empty();
                });
        });

        // Each pass arms exactly one future repaint; egui coalesces duplicate
        // requests and drops any pending one when the app is torn down.
        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
