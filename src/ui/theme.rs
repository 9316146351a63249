use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_active: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub span_bg: Color, // Active window / search range
    pub marker: Color,
    pub label: Color, // Fact names in the inspector
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),
    border_active: Color::Rgb(249, 226, 175), // Yellow while the trace is advancing
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
    span_bg: Color::Rgb(69, 71, 90),
    marker: Color::Rgb(249, 226, 175),
    label: Color::Rgb(148, 226, 213), // Teal
};
