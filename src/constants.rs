/// Base of the WAQI city-feed endpoint; the location key and token are
/// appended per request.
pub const WAQI_FEED_URL: &str = "https://api.waqi.info/feed";

/// Environment variable that overrides the configured API token.
pub const TOKEN_ENV_VAR: &str = "WAQI_API_TOKEN";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_STORE_PATH: &str = "data_countrys.csv";
pub const DEFAULT_EXPORT_PATH: &str = "data.csv";

/// Countries queried when the config supplies no location list. The WAQI
/// feed answers these with the dominant station for the country. A few
/// entries ("Rusia", "Trinidad & Tobago") do not resolve to an ISO code and
/// export with an empty `code` column.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Argentina", "Australia",
    "Austria", "Azerbaijan", "Bahrain", "Bangladesh", "Belgium", "Bhutan",
    "Bolivia", "Bosnia and Herzegovina", "Brazil", "Brunei", "Bulgaria",
    "Cambodia", "Canada", "Chile", "China", "Colombia", "Costa Rica",
    "Croatia", "Cyprus", "Czech Republic", "Denmark", "Ecuador", "Egypt",
    "Estonia", "Finland", "France", "Georgia", "Germany", "Ghana",
    "Gibraltar", "Greece", "Guatemala", "Hong Kong", "Hungary", "Iceland",
    "India", "Indonesia", "Iran", "Iraq", "Ireland", "Israel", "Italy",
    "Japan", "Jordan", "Kazakhstan", "Kenya", "South Korea", "Kosovo",
    "Kuwait", "Kyrgyzstan", "Laos", "Lebanon", "Liberia", "Lithuania",
    "Luxembourg", "Macao", "Macedonia", "Malaysia", "Malta", "Mexico",
    "Mongolia", "Montenegro", "Morocco", "Myanmar", "Nepal", "Netherlands",
    "New Caledonia", "New Zealand", "Norway", "Oman", "Pakistan", "Panama",
    "Peru", "Philippines", "Poland", "Portugal", "Puerto Rico", "Qatar",
    "Romania", "Rusia", "El Salvador", "Saudi Arabia", "Senegal", "Serbia",
    "Singapore", "Slovakia", "Slovenia", "South Africa", "Spain",
    "Sri Lanka", "Sweden", "Switzerland", "Taiwan", "Tanzania", "Thailand",
    "Trinidad & Tobago", "Tunisia", "Turkey", "Ukraine",
    "United Arab Emirates", "United Kingdom", "United States", "Venezuela",
    "Vietnam",
];

pub fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()
}
