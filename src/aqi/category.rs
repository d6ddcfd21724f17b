//! AQI Categories
//!
//! US-EPA style banding of an AQI value and the health advice that goes
//! with each band.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_aqi(aqi: i64) -> Self {
        if aqi <= 50 {
            AqiCategory::Good
        } else if aqi <= 100 {
            AqiCategory::Moderate
        } else if aqi <= 150 {
            AqiCategory::Unhealthy
        } else if aqi <= 200 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Unhealthy => "Unhealthy for Sensitive Groups",
            AqiCategory::VeryUnhealthy => "Unhealthy",
            AqiCategory::Hazardous => "Very Unhealthy",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk."
            }
            AqiCategory::Moderate => {
                "Air quality is acceptable; however, there may be some health concerns for a small number of people."
            }
            AqiCategory::Unhealthy => {
                "Members of sensitive groups may experience health effects. The general public is not likely to be affected."
            }
            AqiCategory::VeryUnhealthy => {
                "Everyone may begin to experience health effects; members of sensitive groups may experience more serious health effects."
            }
            AqiCategory::Hazardous => "Health alert: everyone may experience more serious health effects.",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            AqiCategory::Good => &[
                "Enjoy outdoor activities",
                "Perfect air quality for exercising outside",
                "No restrictions on outdoor activities",
            ],
            AqiCategory::Moderate => &[
                "Sensitive individuals should consider reducing prolonged outdoor exertion",
                "It's a good day for most outdoor activities",
                "Consider morning or evening for strenuous exercises",
            ],
            AqiCategory::Unhealthy => &[
                "People with respiratory or heart disease, the elderly and children should limit prolonged outdoor exertion",
                "Consider rescheduling strenuous outdoor activities",
                "Keep windows closed to prevent outdoor air pollution from coming inside",
            ],
            AqiCategory::VeryUnhealthy => &[
                "Avoid prolonged or heavy exertion",
                "Move activities indoors or reschedule to a time when the air quality is better",
                "Use air purifiers indoors to maintain clean air",
                "Wear a mask if you must go outside",
            ],
            AqiCategory::Hazardous => &[
                "Avoid all physical activity outdoors",
                "Remain indoors with windows and doors closed",
                "Use air purifiers with HEPA filters",
                "Wear a properly fitted N95 mask if you must go outside",
                "Follow public health advice and stay informed",
            ],
        }
    }
}

/// Category and advice for a single AQI reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub aqi: i64,
    pub category: AqiCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub recommendations: Vec<&'static str>,
}

impl Advisory {
    pub fn for_aqi(aqi: i64) -> Self {
        let category = AqiCategory::from_aqi(aqi);
        Self {
            aqi,
            category,
            label: category.label(),
            description: category.description(),
            recommendations: category.recommendations().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(101), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(150), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(151), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(500), AqiCategory::Hazardous);
    }

    #[test]
    fn test_advisory_lists_category_advice() {
        let advisory = Advisory::for_aqi(320);
        assert_eq!(advisory.category, AqiCategory::Hazardous);
        assert_eq!(advisory.recommendations.len(), 5);

        let json = serde_json::to_value(Advisory::for_aqi(175)).expect("serialize");
        assert_eq!(json["category"], "very-unhealthy");
        assert_eq!(json["label"], "Unhealthy");
    }
}
