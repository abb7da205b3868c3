use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static value→rank table used to turn an ordinal survey answer into a number.
pub type OrdinalMapping = &'static [(&'static str, i64)];

const NO_YES: OrdinalMapping = &[("No", 0), ("Yes", 1)];
const NO_MAYBE_YES: OrdinalMapping = &[("No", 0), ("Maybe", 1), ("Yes", 2)];
const LOW_MEDIUM_HIGH: OrdinalMapping = &[("Low", 1), ("Medium", 2), ("High", 3)];
const CARE_OPTIONS: OrdinalMapping = &[("No", 0), ("Not sure", 1), ("Yes", 2)];
const DAYS_INDOORS: OrdinalMapping = &[
    ("More than 2 months", 1),
    ("31-60 days", 2),
    ("15-30 days", 3),
    ("1-14 days", 4),
    ("Go out Every day", 5),
];

/// One column of the survey dataset.
///
/// The schema is closed: the CSV must carry every one of these headers, and
/// every runtime column selection (dropdowns, path parameters, request bodies)
/// is expressed as a `Column` rather than a free-form string. Serialized as the
/// exact CSV header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Timestamp,
    Gender,
    Country,
    Occupation,
    #[serde(rename = "self_employed")]
    SelfEmployed,
    #[serde(rename = "family_history")]
    FamilyHistory,
    #[serde(rename = "treatment")]
    Treatment,
    #[serde(rename = "Days_Indoors")]
    DaysIndoors,
    #[serde(rename = "Growing_Stress")]
    GrowingStress,
    #[serde(rename = "Changes_Habits")]
    ChangesHabits,
    #[serde(rename = "Mental_Health_History")]
    MentalHealthHistory,
    #[serde(rename = "Mood_Swings")]
    MoodSwings,
    #[serde(rename = "Coping_Struggles")]
    CopingStruggles,
    #[serde(rename = "Work_Interest")]
    WorkInterest,
    #[serde(rename = "Social_Weakness")]
    SocialWeakness,
    #[serde(rename = "mental_health_interview")]
    MentalHealthInterview,
    #[serde(rename = "care_options")]
    CareOptions,
}

/// How a column's raw CSV text is interpreted by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Timestamp,
    Categorical,
}

impl Column {
    /// Every column, in CSV schema order.
    pub const ALL: [Column; 17] = [
        Column::Timestamp,
        Column::Gender,
        Column::Country,
        Column::Occupation,
        Column::SelfEmployed,
        Column::FamilyHistory,
        Column::Treatment,
        Column::DaysIndoors,
        Column::GrowingStress,
        Column::ChangesHabits,
        Column::MentalHealthHistory,
        Column::MoodSwings,
        Column::CopingStruggles,
        Column::WorkInterest,
        Column::SocialWeakness,
        Column::MentalHealthInterview,
        Column::CareOptions,
    ];

    /// Columns offered as filters on the visualizations page.
    pub const FILTERABLE: [Column; 6] = [
        Column::Country,
        Column::Gender,
        Column::Treatment,
        Column::Occupation,
        Column::SelfEmployed,
        Column::FamilyHistory,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Gender => "Gender",
            Column::Country => "Country",
            Column::Occupation => "Occupation",
            Column::SelfEmployed => "self_employed",
            Column::FamilyHistory => "family_history",
            Column::Treatment => "treatment",
            Column::DaysIndoors => "Days_Indoors",
            Column::GrowingStress => "Growing_Stress",
            Column::ChangesHabits => "Changes_Habits",
            Column::MentalHealthHistory => "Mental_Health_History",
            Column::MoodSwings => "Mood_Swings",
            Column::CopingStruggles => "Coping_Struggles",
            Column::WorkInterest => "Work_Interest",
            Column::SocialWeakness => "Social_Weakness",
            Column::MentalHealthInterview => "mental_health_interview",
            Column::CareOptions => "care_options",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.header() == header)
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Timestamp => ColumnKind::Timestamp,
            _ => ColumnKind::Categorical,
        }
    }

    /// Human-readable description shown on the features page.
    pub fn description(self) -> &'static str {
        match self {
            Column::Timestamp => "📅 A record of the date and time when an observation or data point was recorded regarding someone's mental health.",
            Column::Gender => "🚻 The classification of a person as male or female.",
            Column::Country => "🌍 The country where a person lives, which is relevant because mental health resources and cultural attitudes can vary by location.",
            Column::Occupation => "💼 A person's usual or principal work or business, which can influence stress levels and access to mental health resources.",
            Column::SelfEmployed => "🏠 Indicates whether a person is self-employed or running their own business, rather than working for an employer.",
            Column::FamilyHistory => "👪 A record of a person's family relationships and medical histories, including any family history of mental health issues.",
            Column::Treatment => "💊 Indicates whether a person is currently undergoing treatment for mental health issues.",
            Column::DaysIndoors => "🏡 How long a person has recently stayed indoors without going out, from every day outside to more than two months in.",
            Column::GrowingStress => "📈 Indicates whether a person's stress level is increasing over time.",
            Column::ChangesHabits => "🔄 Refers to changes in behavior or habits that may signal shifts in mental health.",
            Column::MentalHealthHistory => "📝 A record of a person's past mental health diagnoses, treatments, or issues.",
            Column::MoodSwings => "🎭 Fluctuations in a person's mood, which can be indicative of various mental health conditions.",
            Column::CopingStruggles => "🛡️ Difficulties a person may face in coping with stressors or mental health challenges.",
            Column::WorkInterest => "⭐ The level of interest or engagement a person has in their work or activities.",
            Column::SocialWeakness => "🤝 Difficulties or challenges in social interactions or maintaining relationships.",
            Column::MentalHealthInterview => "🗣️ May refer to a structured interview or assessment conducted to evaluate mental health.",
            Column::CareOptions => "🧭 Options available for seeking care or treatment for mental health issues, such as therapy, medication, or support groups.",
        }
    }

    /// The ordinal encoding of this column, if it has one.
    ///
    /// Columns with a mapping get a numeric counterpart in the derived table
    /// and take part in the correlation matrix.
    pub fn ordinal_mapping(self) -> Option<OrdinalMapping> {
        match self {
            Column::SelfEmployed
            | Column::FamilyHistory
            | Column::Treatment
            | Column::CopingStruggles => Some(NO_YES),
            Column::GrowingStress
            | Column::ChangesHabits
            | Column::MentalHealthHistory
            | Column::WorkInterest
            | Column::SocialWeakness
            | Column::MentalHealthInterview => Some(NO_MAYBE_YES),
            Column::MoodSwings => Some(LOW_MEDIUM_HIGH),
            Column::CareOptions => Some(CARE_OPTIONS),
            Column::DaysIndoors => Some(DAYS_INDOORS),
            Column::Timestamp | Column::Gender | Column::Country | Column::Occupation => None,
        }
    }

    /// Columns with an ordinal mapping, in schema order.
    pub fn encoded() -> impl Iterator<Item = Column> {
        Column::ALL
            .into_iter()
            .filter(|c| c.ordinal_mapping().is_some())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::from_header(s).ok_or_else(|| format!("unknown column '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_round_trip_through_from_header() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.header()), Some(column));
        }
        assert_eq!(Column::from_header("timestamp"), None);
    }

    #[test]
    fn serde_uses_csv_header_names() {
        let json = serde_json::to_string(&Column::SelfEmployed).unwrap();
        assert_eq!(json, "\"self_employed\"");
        let parsed: Column = serde_json::from_str("\"Days_Indoors\"").unwrap();
        assert_eq!(parsed, Column::DaysIndoors);
    }

    #[test]
    fn thirteen_columns_are_ordinal() {
        let encoded: Vec<Column> = Column::encoded().collect();
        assert_eq!(encoded.len(), 13);
        assert!(!encoded.contains(&Column::Country));
        assert_eq!(encoded[0], Column::SelfEmployed);
    }

    #[test]
    fn days_indoors_scale_is_five_levels() {
        let mapping = Column::DaysIndoors.ordinal_mapping().unwrap();
        assert_eq!(mapping.len(), 5);
        assert!(mapping.contains(&("Go out Every day", 5)));
    }

    #[test]
    fn every_column_is_described() {
        for column in Column::ALL {
            assert!(!column.description().is_empty(), "{}", column);
        }
        assert!(Column::DaysIndoors.description().contains("indoors"));
    }
}
