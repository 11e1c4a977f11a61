//! Number locales
//!
//! A small table of culture data used by the `C` and `N` specifiers and for
//! the decimal separator of every other specifier.

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPlacement {
    /// `$1.00`
    Prefix,
    /// `1,00 €` (separated by a no-break space)
    SuffixSpaced,
}

/// Culture data for rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    /// Culture name, e.g. `en-US`.
    pub name: &'static str,
    pub currency_symbol: &'static str,
    pub currency_placement: CurrencyPlacement,
    /// Default fraction digits for the `C` specifier.
    pub currency_digits: usize,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub negative_sign: &'static str,
    pub positive_infinity: &'static str,
    pub negative_infinity: &'static str,
    pub nan: &'static str,
}

const EN_US: NumberLocale = NumberLocale {
    name: "en-US",
    currency_symbol: "$",
    currency_placement: CurrencyPlacement::Prefix,
    currency_digits: 2,
    group_separator: ",",
    decimal_separator: ".",
    negative_sign: "-",
    positive_infinity: "∞",
    negative_infinity: "-∞",
    nan: "NaN",
};

const EN_GB: NumberLocale = NumberLocale {
    name: "en-GB",
    currency_symbol: "£",
    ..EN_US
};

const DE_DE: NumberLocale = NumberLocale {
    name: "de-DE",
    currency_symbol: "€",
    currency_placement: CurrencyPlacement::SuffixSpaced,
    group_separator: ".",
    decimal_separator: ",",
    ..EN_US
};

const FR_FR: NumberLocale = NumberLocale {
    name: "fr-FR",
    currency_symbol: "€",
    currency_placement: CurrencyPlacement::SuffixSpaced,
    group_separator: "\u{202F}",
    decimal_separator: ",",
    ..EN_US
};

const INVARIANT: NumberLocale = NumberLocale {
    name: "invariant",
    currency_symbol: "¤",
    ..EN_US
};

const LOCALES: &[NumberLocale] = &[EN_US, EN_GB, DE_DE, FR_FR, INVARIANT];

impl NumberLocale {
    /// US English, the default culture.
    #[must_use]
    pub fn en_us() -> Self {
        EN_US
    }

    /// Culture-neutral formatting.
    #[must_use]
    pub fn invariant() -> Self {
        INVARIANT
    }

    /// Look up a culture by name (case-insensitive, `_` accepted for `-`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        let wanted = name.trim().replace('_', "-").to_lowercase();
        LOCALES
            .iter()
            .find(|l| l.name.to_lowercase() == wanted)
            .cloned()
    }

    /// Names of the built-in cultures.
    pub fn available() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|l| l.name)
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        let locale = NumberLocale::default();
        assert_eq!(locale.name, "en-US");
        assert_eq!(locale.currency_symbol, "$");
        assert_eq!(locale.currency_placement, CurrencyPlacement::Prefix);
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(NumberLocale::by_name("DE_de").map(|l| l.name), Some("de-DE"));
        assert_eq!(NumberLocale::by_name(" fr-FR ").map(|l| l.name), Some("fr-FR"));
    }

    #[test]
    fn test_by_name_unknown() {
        assert!(NumberLocale::by_name("xx-YY").is_none());
    }

    #[test]
    fn test_available_lists_all() {
        let names: Vec<_> = NumberLocale::available().collect();
        assert_eq!(names, vec!["en-US", "en-GB", "de-DE", "fr-FR", "invariant"]);
    }

    #[test]
    fn test_en_gb_inherits_separators() {
        let gb = NumberLocale::by_name("en-GB").unwrap();
        assert_eq!(gb.currency_symbol, "£");
        assert_eq!(gb.group_separator, ",");
        assert_eq!(gb.decimal_separator, ".");
    }
}
