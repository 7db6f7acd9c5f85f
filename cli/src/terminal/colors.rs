use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 94, g: 175, b: 255 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 190, g: 132, b: 255 };
pub const PREFIX: Color = Color::Yellow;
pub const UNSET: Color = Color::BrightBlack;
