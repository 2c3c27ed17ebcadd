use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// Number and currency conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub symbol_position: SymbolPosition,
    /// Inserted between symbol and number.
    pub symbol_spacing: &'static str,
}

/// Locales with built-in currency formatting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    ItIt,
    TrTr,
    NlNl,
}

#[derive(Debug, Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(String);

impl Locale {
    pub const ALL: [Locale; 7] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::ItIt,
        Locale::TrTr,
        Locale::NlNl,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::ItIt => "it-IT",
            Locale::TrTr => "tr-TR",
            Locale::NlNl => "nl-NL",
        }
    }

    pub fn conventions(&self) -> Conventions {
        match self {
            Locale::EnUs | Locale::EnGb => Conventions {
                group_separator: ",",
                decimal_separator: ".",
                symbol_position: SymbolPosition::Prefix,
                symbol_spacing: "",
            },
            Locale::DeDe | Locale::ItIt => Conventions {
                group_separator: ".",
                decimal_separator: ",",
                symbol_position: SymbolPosition::Suffix,
                symbol_spacing: "\u{a0}",
            },
            Locale::FrFr => Conventions {
                group_separator: "\u{202f}",
                decimal_separator: ",",
                symbol_position: SymbolPosition::Suffix,
                symbol_spacing: "\u{a0}",
            },
            Locale::TrTr => Conventions {
                group_separator: ".",
                decimal_separator: ",",
                symbol_position: SymbolPosition::Prefix,
                symbol_spacing: "",
            },
            Locale::NlNl => Conventions {
                group_separator: ".",
                decimal_separator: ",",
                symbol_position: SymbolPosition::Prefix,
                symbol_spacing: "\u{a0}",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts `de-DE`, `de_DE` and a bare language such as `de`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        let mut parts = normalized.splitn(2, '-');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        let locale = match (language.as_str(), region.as_deref()) {
            ("en", None | Some("US")) => Locale::EnUs,
            ("en", Some("GB")) => Locale::EnGb,
            ("de", None | Some("DE")) => Locale::DeDe,
            ("fr", None | Some("FR")) => Locale::FrFr,
            ("it", None | Some("IT")) => Locale::ItIt,
            ("tr", None | Some("TR")) => Locale::TrTr,
            ("nl", None | Some("NL")) => Locale::NlNl,
            _ => return Err(UnknownLocale(s.to_string())),
        };
        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("de-DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("de_de".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!("tr".parse::<Locale>().unwrap(), Locale::TrTr);
        assert_eq!("en-GB".parse::<Locale>().unwrap(), Locale::EnGb);
        assert!("pt-BR".parse::<Locale>().is_err());
        assert!("en-AU".parse::<Locale>().is_err());
    }

    #[test]
    fn test_tags_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
        }
    }
}
