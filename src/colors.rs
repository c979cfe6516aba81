use ansi_term::{Color, Style};

pub static RED: Style = style(Color::Fixed(9));
pub static BLUE: Style = style(Color::Fixed(12));
pub static CYAN: Style = style(Color::Fixed(14));
pub static WHITE: Style = style(Color::Fixed(15));

#[cfg(feature = "color")]
const fn style(color: Color) -> Style {
    Style {
        foreground: Some(color),
        background: None,
        is_bold: true,
        is_dimmed: false,
        is_italic: false,
        is_underline: false,
        is_blink: false,
        is_reverse: false,
        is_hidden: false,
        is_strikethrough: false,
    }
}

#[cfg(not(feature = "color"))]
const fn style(_color: Color) -> Style {
    Style {
        foreground: None,
        background: None,
        is_bold: false,
        is_dimmed: false,
        is_italic: false,
        is_underline: false,
        is_blink: false,
        is_reverse: false,
        is_hidden: false,
        is_strikethrough: false,
    }
}
