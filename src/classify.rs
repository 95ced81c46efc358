use serde::Serialize;
use std::fmt;

/// The seven AQI buckets the map legend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unavailable,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Moderate => "moderate",
            Status::UnhealthySensitive => "unhealthy_sensitive",
            Status::Unhealthy => "unhealthy",
            Status::VeryUnhealthy => "very_unhealthy",
            Status::Hazardous => "hazardous",
            Status::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an AQI value to exactly one status.
///
/// The buckets are contiguous and inclusive at their upper bound: [0, 50]
/// good, (50, 100] moderate, (100, 150] unhealthy_sensitive, (150, 200]
/// unhealthy, (200, 300] very_unhealthy, (300, 1000] hazardous. Missing,
/// NaN, negative, or above-1000 values are `Unavailable`.
pub fn classify(aqi: Option<f64>) -> Status {
    let value = match aqi {
        Some(v) if v.is_finite() => v,
        _ => return Status::Unavailable,
    };
    if value < 0.0 {
        Status::Unavailable
    } else if value <= 50.0 {
        Status::Good
    } else if value <= 100.0 {
        Status::Moderate
    } else if value <= 150.0 {
        Status::UnhealthySensitive
    } else if value <= 200.0 {
        Status::Unhealthy
    } else if value <= 300.0 {
        Status::VeryUnhealthy
    } else if value <= 1000.0 {
        Status::Hazardous
    } else {
        Status::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_fall_in_the_documented_bucket() {
        let cases = [
            (0.0, Status::Good),
            (50.0, Status::Good),
            (51.0, Status::Moderate),
            (100.0, Status::Moderate),
            (101.0, Status::UnhealthySensitive),
            (150.0, Status::UnhealthySensitive),
            (151.0, Status::Unhealthy),
            (200.0, Status::Unhealthy),
            (201.0, Status::VeryUnhealthy),
            (300.0, Status::VeryUnhealthy),
            (301.0, Status::Hazardous),
            (1000.0, Status::Hazardous),
        ];
        for (value, expected) in cases {
            assert_eq!(classify(Some(value)), expected, "aqi = {value}");
        }
    }

    #[test]
    fn every_integer_in_range_gets_exactly_one_real_status() {
        for v in 0..=1000 {
            let status = classify(Some(v as f64));
            assert_ne!(status, Status::Unavailable, "aqi = {v}");
        }
    }

    #[test]
    fn missing_and_non_numeric_values_are_unavailable() {
        assert_eq!(classify(None), Status::Unavailable);
        assert_eq!(classify(Some(f64::NAN)), Status::Unavailable);
        assert_eq!(classify(Some(-1.0)), Status::Unavailable);
        assert_eq!(classify(Some(1000.5)), Status::Unavailable);
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(Some(42.0)), Status::Good);
        }
    }

    #[test]
    fn labels_render_as_snake_case() {
        assert_eq!(Status::UnhealthySensitive.to_string(), "unhealthy_sensitive");
        assert_eq!(Status::VeryUnhealthy.to_string(), "very_unhealthy");
    }
}
