// File: crates/chart-core/src/aqi.rs
// Summary: Six-level air-quality classification with display names and health advice.

/// EPA-style air-quality level of an index value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    /// Classify `aqi`; each bound is inclusive (100 is Moderate, 101 is not).
    pub fn classify(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiLevel::Good
        } else if aqi <= 100.0 {
            AqiLevel::Moderate
        } else if aqi <= 150.0 {
            AqiLevel::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            AqiLevel::Unhealthy
        } else if aqi <= 300.0 {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is excellent. Perfect for outdoor activities!",
            AqiLevel::Moderate => "Air quality is acceptable. Outdoor activities are generally fine.",
            AqiLevel::UnhealthyForSensitiveGroups => {
                "Sensitive individuals should consider reducing outdoor activities."
            }
            AqiLevel::Unhealthy => "Everyone should limit outdoor activities.",
            AqiLevel::VeryUnhealthy | AqiLevel::Hazardous => {
                "Air quality is hazardous. Avoid outdoor activities."
            }
        }
    }
}
