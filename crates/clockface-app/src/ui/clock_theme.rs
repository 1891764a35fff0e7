use eframe::egui::{Color32, Visuals};

/// Color palette for clock dial rendering.
///
/// Kept separate from `egui::Visuals` so dial-specific roles (rim, hands,
/// hub) can be tuned without being constrained by the global UI theme.
#[derive(Debug, Clone)]
pub(crate) struct ClockPalette {
    pub(crate) face_bg: Color32,
    pub(crate) rim: Color32,
    pub(crate) numeral: Color32,
    pub(crate) hand: Color32,
    pub(crate) second_hand: Color32,
    pub(crate) hub: Color32,
}

impl ClockPalette {
    /// Initialize the palette from the current visuals.
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let strong = visuals.strong_text_color();

        Self {
            face_bg: visuals.extreme_bg_color,
            rim: strong,
            numeral: visuals.text_color(),
            hand: strong,
            second_hand: visuals.warn_fg_color,
            hub: strong,
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct ClockTheme {
    pub(crate) light: ClockPalette,
    pub(crate) dark: ClockPalette,
}

impl ClockTheme {
    /// Create a theme using the current visuals for both palettes.
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        let palette = ClockPalette::from_visuals(visuals);
        Self {
            light: palette.clone(),
            dark: palette,
        }
    }

    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &ClockPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
