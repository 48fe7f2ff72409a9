use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_LOADING: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TAG_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
