use yansi::Style;

/// A single recognized style attribute.
///
/// Foreground colors use lowercase option names, background colors the
/// capitalized form (`"red"` vs `"Red"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttr {
    Bold,
    Light,
    Blink,
    Invert,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgPurple,
    BgCyan,
    BgWhite,
}

impl StyleAttr {
    /// Look up an attribute by its option name
    pub fn from_name(name: &str) -> Option<StyleAttr> {
        match name {
            "bold" => Some(StyleAttr::Bold),
            "light" => Some(StyleAttr::Light),
            "blink" => Some(StyleAttr::Blink),
            "invert" => Some(StyleAttr::Invert),
            "black" => Some(StyleAttr::Black),
            "red" => Some(StyleAttr::Red),
            "green" => Some(StyleAttr::Green),
            "yellow" => Some(StyleAttr::Yellow),
            "blue" => Some(StyleAttr::Blue),
            "purple" => Some(StyleAttr::Purple),
            "cyan" => Some(StyleAttr::Cyan),
            "white" => Some(StyleAttr::White),
            "Black" => Some(StyleAttr::BgBlack),
            "Red" => Some(StyleAttr::BgRed),
            "Green" => Some(StyleAttr::BgGreen),
            "Yellow" => Some(StyleAttr::BgYellow),
            "Blue" => Some(StyleAttr::BgBlue),
            "Purple" => Some(StyleAttr::BgPurple),
            "Cyan" => Some(StyleAttr::BgCyan),
            "White" => Some(StyleAttr::BgWhite),
            _ => None,
        }
    }

    /// Option name for this attribute
    pub fn name(self) -> &'static str {
        match self {
            StyleAttr::Bold => "bold",
            StyleAttr::Light => "light",
            StyleAttr::Blink => "blink",
            StyleAttr::Invert => "invert",
            StyleAttr::Black => "black",
            StyleAttr::Red => "red",
            StyleAttr::Green => "green",
            StyleAttr::Yellow => "yellow",
            StyleAttr::Blue => "blue",
            StyleAttr::Purple => "purple",
            StyleAttr::Cyan => "cyan",
            StyleAttr::White => "white",
            StyleAttr::BgBlack => "Black",
            StyleAttr::BgRed => "Red",
            StyleAttr::BgGreen => "Green",
            StyleAttr::BgYellow => "Yellow",
            StyleAttr::BgBlue => "Blue",
            StyleAttr::BgPurple => "Purple",
            StyleAttr::BgCyan => "Cyan",
            StyleAttr::BgWhite => "White",
        }
    }

    /// Fold this attribute into an ANSI style.
    ///
    /// `purple` maps onto the SGR magenta pair, matching the classic
    /// terminal color table.
    pub(crate) fn apply(self, style: Style) -> Style {
        match self {
            StyleAttr::Bold => style.bold(),
            StyleAttr::Light => style.dim(),
            StyleAttr::Blink => style.blink(),
            StyleAttr::Invert => style.invert(),
            StyleAttr::Black => style.black(),
            StyleAttr::Red => style.red(),
            StyleAttr::Green => style.green(),
            StyleAttr::Yellow => style.yellow(),
            StyleAttr::Blue => style.blue(),
            StyleAttr::Purple => style.magenta(),
            StyleAttr::Cyan => style.cyan(),
            StyleAttr::White => style.white(),
            StyleAttr::BgBlack => style.on_black(),
            StyleAttr::BgRed => style.on_red(),
            StyleAttr::BgGreen => style.on_green(),
            StyleAttr::BgYellow => style.on_yellow(),
            StyleAttr::BgBlue => style.on_blue(),
            StyleAttr::BgPurple => style.on_magenta(),
            StyleAttr::BgCyan => style.on_cyan(),
            StyleAttr::BgWhite => style.on_white(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        assert_eq!(StyleAttr::from_name("bold"), Some(StyleAttr::Bold));
        assert_eq!(StyleAttr::from_name("red"), Some(StyleAttr::Red));
        assert_eq!(StyleAttr::from_name("purple"), Some(StyleAttr::Purple));
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(StyleAttr::from_name("wrongopt"), None);
        assert_eq!(StyleAttr::from_name(""), None);
        assert_eq!(StyleAttr::from_name("BOLD"), None);
    }

    #[test]
    fn test_from_name_case_distinguishes_background() {
        assert_eq!(StyleAttr::from_name("red"), Some(StyleAttr::Red));
        assert_eq!(StyleAttr::from_name("Red"), Some(StyleAttr::BgRed));
    }

    #[test]
    fn test_name_roundtrip() {
        for name in ["bold", "light", "blink", "invert", "green", "Green"] {
            let attr = StyleAttr::from_name(name).unwrap();
            assert_eq!(attr.name(), name);
        }
    }
}
