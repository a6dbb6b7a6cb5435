use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub identifier: Color, // Sky blue, editor text
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(229, 231, 235),
    primary: Color::Rgb(37, 99, 235),     // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(148, 163, 184),
    success: Color::Rgb(34, 197, 94),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for sigils
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(2, 6, 23),     // Status bar background
    function: Color::Rgb(249, 226, 175),       // Yellow for the program wrapper
    identifier: Color::Rgb(56, 189, 248),
};
