//! Country lookup capability shared by every provider variant

/// Looks countries up by any of their ISO 3166-1 keys.
///
/// `Output` is the variant's answer for a single lookup: a `Result` for providers that
/// report why a lookup failed, an `Option` for providers that only report absence.
pub trait CountryProvider {
    type Output;

    /// Retrieves a country by its exact official name.
    fn get_by_name(&self, name: &str) -> Self::Output;

    /// Retrieves a country by its alpha-2 code (`US`, `SK`, ...).
    fn get_by_alpha2(&self, alpha2: &str) -> Self::Output;

    /// Retrieves a country by its alpha-3 code (`USA`, `SVK`, ...).
    fn get_by_alpha3(&self, alpha3: &str) -> Self::Output;

    /// Retrieves a country by its three digit numeric code (`840`, `703`, ...).
    fn get_by_numerical_code(&self, numerical_code: &str) -> Self::Output;
}
