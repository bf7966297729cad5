//! Country value object and lookup key kinds

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

static ALPHA2_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid alpha-2 pattern"));
static ALPHA3_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid alpha-3 pattern"));
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("valid numeric pattern"));

/// The key a country is looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Name,
    Alpha2,
    Alpha3,
    Numeric,
}

impl Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                KeyKind::Name => "name",
                KeyKind::Alpha2 => "alpha-2",
                KeyKind::Alpha3 => "alpha-3",
                KeyKind::Numeric => "numeric",
            }
        )
    }
}

impl KeyKind {
    /// Checks whether `value` has the shape required for this key.
    ///
    /// Names only need to be non-empty; codes must match their exact ISO 3166-1 form
    /// (uppercase ASCII letters or ASCII digits, no surrounding whitespace).
    pub fn is_well_formed(&self, value: &str) -> bool {
        match self {
            KeyKind::Name => !value.is_empty(),
            KeyKind::Alpha2 => ALPHA2_PATTERN.is_match(value),
            KeyKind::Alpha3 => ALPHA3_PATTERN.is_match(value),
            KeyKind::Numeric => NUMERIC_PATTERN.is_match(value),
        }
    }
}

/// An ISO 3166-1 country.
///
/// `C` is the currency representation: raw codes for the strict provider, resolved
/// currency objects for the tolerant one. Identity is carried by the three codes only,
/// see [`Country::is`].
#[derive(Debug, Clone)]
pub struct Country<C = String> {
    name: String,
    alpha2: String,
    alpha3: String,
    numeric_code: String,
    currencies: Vec<C>,
}

impl<C> Country<C> {
    pub(crate) fn new(
        name: String,
        alpha2: String,
        alpha3: String,
        numeric_code: String,
        currencies: Vec<C>,
    ) -> Self {
        Self {
            name,
            alpha2,
            alpha3,
            numeric_code,
            currencies,
        }
    }

    /// Official name of the country.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Numeric code, kept as text so leading zeros survive (`"004"`).
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Currencies used within the country, in dataset order.
    pub fn currencies(&self) -> &[C] {
        &self.currencies
    }

    /// Returns true if both values describe the same country.
    ///
    /// Name and currencies are ignored so that a country resolved through different
    /// providers still compares equal.
    pub fn is<D>(&self, other: &Country<D>) -> bool {
        self.alpha2 == other.alpha2
            && self.alpha3 == other.alpha3
            && self.numeric_code == other.numeric_code
    }
}

impl<C, D> PartialEq<Country<D>> for Country<C> {
    fn eq(&self, other: &Country<D>) -> bool {
        self.is(other)
    }
}

impl<C> Eq for Country<C> {}

impl<C> Display for Country<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alpha2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slovakia(name: &str, currencies: Vec<String>) -> Country {
        Country::new(
            name.to_string(),
            "SK".to_string(),
            "SVK".to_string(),
            "703".to_string(),
            currencies,
        )
    }

    #[test]
    fn test_is_ignores_name_and_currencies() {
        let a = slovakia("Slovakia", vec!["EUR".to_string()]);
        let b = slovakia("Slovak Republic", vec![]);

        assert!(a.is(&b));
        assert!(b.is(&a));
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_requires_all_codes() {
        let a = slovakia("Slovakia", vec![]);
        let b = Country::<String>::new(
            "Slovakia".to_string(),
            "SK".to_string(),
            "SVK".to_string(),
            "705".to_string(),
            vec![],
        );

        assert!(!a.is(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_alpha2() {
        let country = slovakia("Slovakia", vec!["EUR".to_string()]);
        assert_eq!(country.to_string(), "SK");
        assert_eq!(country.to_string(), country.alpha2());
    }

    #[test]
    fn test_key_kind_display() {
        assert_eq!(KeyKind::Name.to_string(), "name");
        assert_eq!(KeyKind::Alpha2.to_string(), "alpha-2");
        assert_eq!(KeyKind::Alpha3.to_string(), "alpha-3");
        assert_eq!(KeyKind::Numeric.to_string(), "numeric");
    }

    #[test]
    fn test_key_kind_shapes() {
        assert!(KeyKind::Name.is_well_formed("Slovakia"));
        assert!(!KeyKind::Name.is_well_formed(""));

        assert!(KeyKind::Alpha2.is_well_formed("SK"));
        for value in ["sk", "sK", "S", "SVK", "12", "", "SK\n", " SK"] {
            assert!(!KeyKind::Alpha2.is_well_formed(value), "{value:?}");
        }

        assert!(KeyKind::Alpha3.is_well_formed("SVK"));
        for value in ["svk", "sVk", "SK", "123", "SVKA", ""] {
            assert!(!KeyKind::Alpha3.is_well_formed(value), "{value:?}");
        }

        assert!(KeyKind::Numeric.is_well_formed("004"));
        // Non-ASCII digits are not numeric codes
        for value in ["123a", "", "SVK", "12345", "٧٠٣"] {
            assert!(!KeyKind::Numeric.is_well_formed(value), "{value:?}");
        }
    }
}
