//! Symbol lists and the tabs that group them.

pub mod list;
pub mod tab;

pub use list::{MutableSymbolList, SplitType, SymbolList, Symbols};
pub use tab::{SymbolTab, TabKind};

/// A closed set of variants parsed from free-form strings.
///
/// Data files may name variants this build does not know yet; those fall back
/// to a default instead of failing the whole file.
pub trait NamedVariant: Copy + 'static {
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    /// Case-sensitive lookup; `fallback` for `None` or unknown names.
    fn get_or_default(name: Option<&str>, fallback: Self) -> Self {
        name.and_then(|name| {
            Self::VARIANTS
                .iter()
                .copied()
                .find(|variant| variant.name() == name)
        })
        .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive_and_total() {
        assert_eq!(
            TabKind::get_or_default(Some("KAOMOJIS"), TabKind::Symbols),
            TabKind::Kaomojis
        );
        assert_eq!(
            TabKind::get_or_default(Some("kaomojis"), TabKind::Symbols),
            TabKind::Symbols
        );
        assert_eq!(
            TabKind::get_or_default(Some("bogus"), TabKind::Symbols),
            TabKind::Symbols
        );
        assert_eq!(TabKind::get_or_default(None, TabKind::Kaomojis), TabKind::Kaomojis);
        assert_eq!(
            SplitType::get_or_default(Some("LINE"), SplitType::Codepoint),
            SplitType::Line
        );
        assert_eq!(
            SplitType::get_or_default(Some(""), SplitType::Codepoint),
            SplitType::Codepoint
        );
    }
}
