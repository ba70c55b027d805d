use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles for the dashboard chrome, e.g. `"muted": "dark gray"`.
#[derive(Clone, Debug, Default, PartialEq, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    pub fn get_or(&self, key: &str, fallback: Style) -> Style {
        self.0.get(key).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(Styles(styles))
    }
}

/// Parses `"bold white on #334155"`: modifiers and a foreground colour,
/// then optionally ` on ` and a background colour.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let lower = line.trim().to_ascii_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg.trim(), Some(bg.trim())),
        None => match lower.strip_prefix("on ") {
            Some(bg) => ("", Some(bg.trim())),
            None => (lower.as_str(), None),
        },
    };

    let (modifiers, fg_color) = split_modifiers(foreground);
    let mut style = Style::default().add_modifier(modifiers);
    if !fg_color.is_empty() {
        style = style.fg(parse_color(&fg_color)?);
    }
    if let Some(bg) = background {
        style = style.bg(parse_color(bg)?);
    }
    Ok(style)
}

fn split_modifiers(raw: &str) -> (Modifier, String) {
    let mut modifiers = Modifier::empty();
    let mut rest = Vec::new();
    for word in raw.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" | "underlined" => modifiers |= Modifier::UNDERLINED,
            "reversed" | "inverse" => modifiers |= Modifier::REVERSED,
            "crossed" | "strikethrough" => modifiers |= Modifier::CROSSED_OUT,
            _ => rest.push(word),
        }
    }
    (modifiers, rest.join(" "))
}

pub fn parse_color(raw: &str) -> Result<Color, String> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| format!("invalid hex colour {raw:?}"));
    }
    if let Some(index) = s.strip_prefix("color") {
        return index
            .trim()
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| format!("invalid indexed colour {raw:?}"));
    }
    let color = match s {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark gray" | "dark grey" | "darkgray" => Color::DarkGray,
        "light red" => Color::LightRed,
        "light green" => Color::LightGreen,
        "light yellow" => Color::LightYellow,
        "light blue" => Color::LightBlue,
        "light magenta" => Color::LightMagenta,
        "light cyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => return Err(format!("unknown colour {raw:?}")),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("white", Style::default().fg(Color::White))]
    #[case("bold white on #334155", Style::default().add_modifier(Modifier::BOLD).fg(Color::White).bg(Color::Rgb(0x33, 0x41, 0x55)))]
    #[case("dark gray", Style::default().fg(Color::DarkGray))]
    #[case("on blue", Style::default().bg(Color::Blue))]
    #[case("italic", Style::default().add_modifier(Modifier::ITALIC))]
    #[case("color42", Style::default().fg(Color::Indexed(42)))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), Ok(expected));
    }

    #[rstest]
    #[case("chartreuse")]
    #[case("#12345")]
    #[case("white on #zzzzzz")]
    fn test_parse_style_invalid(#[case] raw: &str) {
        assert!(parse_style(raw).is_err());
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "muted": "dark gray" }"#)?;
        assert_eq!(
            styles.get_or("muted", Style::default()),
            Style::default().fg(Color::DarkGray)
        );
        assert_eq!(styles.get_or("missing", Style::default()), Style::default());
        Ok(())
    }
}
