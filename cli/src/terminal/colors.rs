use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const ENABLED: Color = Color::Green;
pub const DISABLED: Color = Color::Red;

pub const PRIORITY_LOW: Color = Color::BrightBlack;
pub const PRIORITY_MEDIUM: Color = Color::Yellow;
pub const PRIORITY_HIGH: Color = Color::BrightRed;
