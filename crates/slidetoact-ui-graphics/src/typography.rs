//! Typography data structures (font styles, weights, typefaces)

/// Font style (normal, italic)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Typeface used for the slider label (data only, no font loading).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Typeface {
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Typeface {
    pub const NORMAL: Typeface = Typeface {
        weight: FontWeight::NORMAL,
        style: FontStyle::Normal,
    };
    pub const BOLD: Typeface = Typeface {
        weight: FontWeight::BOLD,
        style: FontStyle::Normal,
    };
    pub const ITALIC: Typeface = Typeface {
        weight: FontWeight::NORMAL,
        style: FontStyle::Italic,
    };
}
