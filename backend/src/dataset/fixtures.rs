//! Small survey extract shared by the unit tests.

use crate::dataset::derived::DerivedTable;
use crate::dataset::loader;
use crate::dataset::state::DatasetState;
use crate::dataset::table::Table;

pub const HEADER: &str = "Timestamp,Gender,Country,Occupation,self_employed,family_history,treatment,Days_Indoors,Growing_Stress,Changes_Habits,Mental_Health_History,Mood_Swings,Coping_Struggles,Work_Interest,Social_Weakness,mental_health_interview,care_options";

pub const SURVEY_CSV: &str = "\
Timestamp,Gender,Country,Occupation,self_employed,family_history,treatment,Days_Indoors,Growing_Stress,Changes_Habits,Mental_Health_History,Mood_Swings,Coping_Struggles,Work_Interest,Social_Weakness,mental_health_interview,care_options
8/27/2014 11:29,Female,United States,Corporate,No,No,Yes,1-14 days,Yes,No,Yes,Medium,No,No,Yes,No,Not sure
8/27/2014 11:31,Female,United States,Corporate,,Yes,Yes,1-14 days,Yes,No,Yes,Medium,No,No,Yes,No,No
8/28/2014 09:00,Male,Poland,Student,No,No,No,Go out Every day,No,Maybe,No,Low,Yes,Maybe,No,Maybe,Yes
9/02/2014 10:15,Male,Australia,Business,Yes,Yes,Yes,More than 2 months,Maybe,Yes,Maybe,High,No,Yes,Maybe,No,Yes
9/15/2014 16:40,Female,Poland,Student,No,No,No,15-30 days,No,Yes,No,Low,Yes,No,No,Yes,No
10/01/2014 08:05,Male,United States,Housewife,No,Yes,Yes,31-60 days,Yes,Maybe,Yes,High,No,Maybe,Yes,No,Not sure
";

pub fn base_table() -> Table {
    loader::parse(SURVEY_CSV.as_bytes()).expect("fixture parses")
}

pub fn derived_table() -> DerivedTable {
    DerivedTable::build(base_table())
}

pub fn state() -> DatasetState {
    DatasetState::new(derived_table(), "fixture".to_string())
}

/// Builds a table from the given data lines under the standard header.
pub fn table_from_rows(rows: &[&str]) -> DerivedTable {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    DerivedTable::build(loader::parse(csv.as_bytes()).expect("rows parse"))
}
