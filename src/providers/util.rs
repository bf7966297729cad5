use crate::core::country::Country;
use crate::core::source::CountryRecord;

/// Builds a country from a raw record, mapping each currency code in order.
///
/// Every occurrence is mapped, duplicates included.
pub(crate) fn build_country<C>(
    record: CountryRecord,
    mut resolve_currency: impl FnMut(String) -> C,
) -> Country<C> {
    let currencies = record
        .currency
        .into_iter()
        .map(&mut resolve_currency)
        .collect();
    Country::new(
        record.name,
        record.alpha2,
        record.alpha3,
        record.numeric,
        currencies,
    )
}
