use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

/// Which computation path a query takes.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Exact,
    Asymptotic,
}

impl DisplayMode {
    pub fn parse(s: &str) -> Option<DisplayMode> {
        DisplayMode::iter().find(|e| e.to_string() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DisplayMode::Exact => "Exact / Bounds",
            DisplayMode::Asymptotic => "Asymptotic",
        }
    }
}
