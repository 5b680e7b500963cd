use ratatui::style::Color;

pub const PRIMARY: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const FG: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FG_SECONDARY: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const BG: Color = Color::Rgb(0x11, 0x11, 0x11);
pub const BG_TERTIARY: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BORDER_HOVER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
