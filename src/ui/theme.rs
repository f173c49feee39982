use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub function: Color,
    pub border: Color,
    pub current_line_bg: Color,
    pub comparing: Color,
    pub swapped: Color,
    pub pivot: Color,
    pub placing: Color,
    pub finalized: Color,
    pub snapshot: Color,
    pub inactive: Color, // Elements outside the active range
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    number: Color::Rgb(250, 179, 135),
    function: Color::Rgb(249, 226, 175),
    border: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    comparing: Color::Rgb(249, 226, 175), // Yellow
    swapped: Color::Rgb(243, 139, 168),   // Red
    pivot: Color::Rgb(203, 166, 247),     // Mauve
    placing: Color::Rgb(148, 226, 213),   // Teal
    finalized: Color::Rgb(166, 227, 161), // Green
    snapshot: Color::Rgb(116, 199, 236),  // Sapphire
    inactive: Color::Rgb(88, 91, 112),
};
