//! User-facing text for results and failures

use std::{fmt, str::FromStr};

use domain::RoadPreference;
use serde::{Deserialize, Serialize};

use crate::{error::ApplicationError, services::SearchOutcome};

/// Language of user-facing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ja" | "japanese" => Ok(Self::Ja),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Three lines describing where the roulette landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Region followed by locality
    pub headline: String,
    /// Straight-line distance, one decimal
    pub distance: String,
    /// Time budget and road preference
    pub trip: String,
}

fn road_label(preference: RoadPreference, locale: Locale) -> &'static str {
    match (locale, preference) {
        (Locale::En, RoadPreference::Highway) => "highway",
        (Locale::En, RoadPreference::LocalRoads) => "local roads only",
        (Locale::Ja, RoadPreference::Highway) => "高速あり",
        (Locale::Ja, RoadPreference::LocalRoads) => "下道のみ",
    }
}

/// Render a successful spin
pub fn result_summary(outcome: &SearchOutcome, locale: Locale) -> ResultSummary {
    let distance_km = outcome.result.distance_km;
    let minutes = outcome.request.time_budget.minutes();
    let road = road_label(outcome.request.road_preference, locale);

    let (distance, trip) = match locale {
        Locale::En => (
            format!("about {distance_km:.1} km"),
            format!("{minutes} min / {road}"),
        ),
        Locale::Ja => (format!("約{distance_km:.1}km"), format!("{minutes}分 / {road}")),
    };

    ResultSummary {
        headline: outcome.result.place.to_string(),
        distance,
        trip,
    }
}

/// Label for a travel-time option, e.g. "1.5 hours" or "1時間30分"
pub fn time_option_label(minutes: u32, locale: Locale) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match locale {
        Locale::En if hours == 0 => format!("{minutes} min"),
        Locale::En if rest == 0 && hours == 1 => "1 hour".to_string(),
        Locale::En if rest == 0 => format!("{hours} hours"),
        Locale::En if rest == 30 => format!("{hours}.5 hours"),
        Locale::En => format!("{hours} h {rest} min"),
        Locale::Ja if hours == 0 => format!("{minutes}分"),
        Locale::Ja if rest == 0 => format!("{hours}時間"),
        Locale::Ja => format!("{hours}時間{rest}分"),
    }
}

/// Render a failed spin
pub fn failure_message(error: &ApplicationError, locale: Locale) -> String {
    match locale {
        Locale::En => english_failure(error),
        Locale::Ja => japanese_failure(error),
    }
}

fn english_failure(error: &ApplicationError) -> String {
    match error {
        ApplicationError::Validation(_) => "Please enter a starting point!".to_string(),
        ApplicationError::Domain(e) => format!("Please check your selection: {e}"),
        ApplicationError::NotFound(_) => {
            "Could not find that address. Please try a different one!".to_string()
        }
        ApplicationError::Network(detail) => {
            format!("Failed to look up the address: {detail}. Please press the button again!")
        }
        ApplicationError::ExhaustedRetries { .. } => {
            "Landed in the ocean, please spin again _(._.)_".to_string()
        }
        ApplicationError::Configuration(_) => {
            "Something went wrong. Please try again later.".to_string()
        }
    }
}

fn japanese_failure(error: &ApplicationError) -> String {
    match error {
        ApplicationError::Validation(_) => "出発地を入力してね！".to_string(),
        ApplicationError::Domain(e) => format!("入力内容を確認してね：{e}"),
        ApplicationError::NotFound(_) => {
            "住所が見つかりませんでした。別の住所を試してみてください！".to_string()
        }
        ApplicationError::Network(detail) => format!(
            "住所の取得に失敗しました：{detail} もう一度ボタンを押してみてください！"
        ),
        ApplicationError::ExhaustedRetries { .. } => {
            "海に当たってしまいました、もう一度回してください_(._.)_".to_string()
        }
        ApplicationError::Configuration(_) => {
            "エラーが発生しました。しばらくしてからもう一度お試しください。".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{
        Coordinate, PlaceName, ReachabilityPolicy, SearchRequest, SearchResult, TimeBudget,
    };

    use super::*;

    fn outcome(minutes: u32, preference: RoadPreference, distance_km: f64) -> SearchOutcome {
        SearchOutcome {
            request: SearchRequest::new(
                "東京駅",
                Coordinate::tokyo_station(),
                TimeBudget::new(minutes).unwrap(),
                preference,
                &ReachabilityPolicy::default(),
            ),
            result: SearchResult {
                point: Coordinate::new(35.9, 139.6).unwrap(),
                place: PlaceName::new("埼玉県", "さいたま市"),
                distance_km,
                attempts: 2,
            },
        }
    }

    #[test]
    fn english_summary() {
        let summary = result_summary(&outcome(60, RoadPreference::Highway, 27.345), Locale::En);
        assert_eq!(summary.headline, "埼玉県さいたま市");
        assert_eq!(summary.distance, "about 27.3 km");
        assert_eq!(summary.trip, "60 min / highway");
    }

    #[test]
    fn japanese_summary() {
        let summary = result_summary(&outcome(30, RoadPreference::LocalRoads, 12.0), Locale::Ja);
        assert_eq!(summary.distance, "約12.0km");
        assert_eq!(summary.trip, "30分 / 下道のみ");
    }

    #[test]
    fn ocean_message_is_distinct() {
        let exhausted = ApplicationError::ExhaustedRetries { attempts: 16 };
        let ocean = failure_message(&exhausted, Locale::Ja);
        let offline = ApplicationError::Network("timeout".to_string());
        let network = failure_message(&offline, Locale::Ja);
        assert!(ocean.contains("海"));
        assert!(network.contains("timeout"));
        assert_ne!(ocean, network);
    }

    #[test]
    fn validation_message() {
        let msg = failure_message(&ApplicationError::Validation("empty".to_string()), Locale::En);
        assert_eq!(msg, "Please enter a starting point!");
    }

    #[test]
    fn time_labels() {
        let en: Vec<_> = [30, 60, 90, 120].map(|m| time_option_label(m, Locale::En)).to_vec();
        assert_eq!(en, ["30 min", "1 hour", "1.5 hours", "2 hours"]);

        let ja: Vec<_> = [30, 60, 90, 120].map(|m| time_option_label(m, Locale::Ja)).to_vec();
        assert_eq!(ja, ["30分", "1時間", "1時間30分", "2時間"]);

        assert_eq!(time_option_label(75, Locale::En), "1 h 15 min");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("ja".parse::<Locale>().unwrap(), Locale::Ja);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
