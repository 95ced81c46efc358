use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Names from the WAQI location list that the ISO 3166 registry spells
/// differently (short forms, former official names). Everything else goes
/// through the registry itself.
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bolivia", "BOL"),
        ("brunei", "BRN"),
        ("czech republic", "CZE"),
        ("iran", "IRN"),
        ("laos", "LAO"),
        ("macao", "MAC"),
        ("macedonia", "MKD"),
        ("moldova", "MDA"),
        ("netherlands", "NLD"),
        ("russia", "RUS"),
        ("south korea", "KOR"),
        ("syria", "SYR"),
        ("taiwan", "TWN"),
        ("tanzania", "TZA"),
        ("trinidad & tobago", "TTO"),
        ("turkey", "TUR"),
        ("united kingdom", "GBR"),
        ("united states", "USA"),
        ("venezuela", "VEN"),
        ("vietnam", "VNM"),
    ])
});

/// ISO 3166 alpha-3 code for a location name, when the name resolves.
///
/// Lookup is case-insensitive against the alias table first, then the
/// registry's official names. Unresolvable names (misspellings such as
/// "Rusia", or non-ISO territories such as Kosovo) yield `None`; callers
/// keep the row and leave the code column empty.
pub fn alpha3(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    if let Some(code) = ALIASES.get(trimmed.to_ascii_lowercase().as_str()).copied() {
        return Some(code);
    }
    rust_iso3166::ALL
        .iter()
        .find(|country| country.name.eq_ignore_ascii_case(trimmed))
        .map(|country| country.alpha3)
}
