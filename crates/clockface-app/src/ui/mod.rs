pub(crate) mod clock;
pub(crate) mod clock_theme;
