use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 122, g: 162, b: 247 };
pub const ACCENT: Color = Color::TrueColor { r: 224, g: 175, b: 104 };
pub const SEPARATOR: Color = Color::TrueColor { r: 86, g: 95, b: 137 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 202, b: 245 };
pub const AMOUNT: Color = Color::TrueColor { r: 158, g: 206, b: 106 };
pub const COUNTRY: Color = Color::TrueColor { r: 125, g: 207, b: 255 };
