/// Visual variant selected by the card's `variant` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Plain,
    Elevated,
    Dark,
    Bordered,
}

impl CardVariant {
    /// Every class a variant can add; all are removed before a new one is applied.
    pub const CLASSES: [&'static str; 3] = ["card--elevated", "card--dark", "card--bordered"];

    /// Unknown or missing values mean no variant.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("elevated") => Self::Elevated,
            Some("dark") => Self::Dark,
            Some("bordered") => Self::Bordered,
            _ => Self::Plain,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Elevated => Some(Self::CLASSES[0]),
            Self::Dark => Some(Self::CLASSES[1]),
            Self::Bordered => Some(Self::CLASSES[2]),
        }
    }

    /// Attribute value that selects this variant.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Elevated => Some("elevated"),
            Self::Dark => Some("dark"),
            Self::Bordered => Some("bordered"),
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Plain => Self::Elevated,
            Self::Elevated => Self::Dark,
            Self::Dark => Self::Bordered,
            Self::Bordered => Self::Plain,
        }
    }
}
