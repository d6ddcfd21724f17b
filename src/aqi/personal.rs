//! Personalized Outdoor Advice
//!
//! Narrows an hourly forecast to the hours a person is usually outside and
//! whose AQI stays under a threshold set by their sensitivity and activity.

use serde::{Deserialize, Serialize};

use super::forecast::HourlyForecast;

/// Hours assumed when a profile does not list its own.
pub const DEFAULT_OUTDOOR_HOURS: std::ops::RangeInclusive<u32> = 6..=21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub has_sensitivities: bool,
    pub activity_level: ActivityLevel,
    pub typical_outdoor_hours: Vec<u32>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            has_sensitivities: false,
            activity_level: ActivityLevel::default(),
            typical_outdoor_hours: DEFAULT_OUTDOOR_HOURS.collect(),
        }
    }
}

impl UserProfile {
    /// Highest AQI this person should be outside in. Sensitivity overrides
    /// activity level.
    pub fn aqi_threshold(&self) -> i64 {
        if self.has_sensitivities {
            return 50;
        }
        match self.activity_level {
            ActivityLevel::Low => 100,
            ActivityLevel::Moderate => 75,
            ActivityLevel::High => 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalAdvice {
    pub recommended_hours: Vec<u32>,
    pub personal_advice: Vec<String>,
}

pub fn personalized_advice(forecast: &[HourlyForecast], profile: &UserProfile) -> PersonalAdvice {
    let threshold = profile.aqi_threshold();
    let mut eligible: Vec<HourlyForecast> = forecast
        .iter()
        .filter(|f| profile.typical_outdoor_hours.contains(&f.hour) && f.aqi <= threshold)
        .copied()
        .collect();
    eligible.sort_by_key(|f| f.aqi);
    let recommended_hours: Vec<u32> = eligible.into_iter().take(3).map(|f| f.hour).collect();

    let mut advice = Vec::new();
    if recommended_hours.is_empty() {
        advice.push("Today's air quality doesn't meet your health requirements.".to_string());
        advice.push("Consider indoor activities or using air purification.".to_string());
        if profile.has_sensitivities {
            advice.push(
                "For sensitive individuals, wearing a mask is recommended if you must go outside.".to_string(),
            );
        }
    } else {
        let hours: Vec<String> = recommended_hours.iter().map(|h| format!("{}:00", h)).collect();
        advice.push(format!("Best hours for your outdoor activities: {}", hours.join(", ")));
        if profile.activity_level == ActivityLevel::High {
            advice.push("For high-intensity activities, consider reducing duration if AQI rises above 50.".to_string());
        }
        if profile.has_sensitivities {
            advice.push("Monitor your breathing and symptoms even during recommended hours.".to_string());
        }
    }

    PersonalAdvice { recommended_hours, personal_advice: advice }
}
