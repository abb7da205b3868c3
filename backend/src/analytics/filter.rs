use crate::dataset::table::Table;
use common::model::filter::FilterSpec;

/// Indices of the rows passing every active constraint of `spec`, in table order.
pub fn apply(table: &Table, spec: &FilterSpec) -> Vec<usize> {
    let active: Vec<_> = spec.active().collect();
    (0..table.len())
        .filter(|&row| {
            active
                .iter()
                .all(|c| c.allows(table.value(c.column, row)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;
    use common::model::column::Column;

    #[test]
    fn unconstrained_spec_keeps_every_row() {
        let table = fixtures::base_table();
        assert_eq!(apply(&table, &FilterSpec::all()), vec![0, 1, 2, 3, 4, 5]);
        let sentinel = FilterSpec::all().with(Column::Country, &["All"]);
        assert_eq!(apply(&table, &sentinel).len(), 6);
    }

    #[test]
    fn constraints_are_conjunctive() {
        let table = fixtures::base_table();
        let spec = FilterSpec::all()
            .with(Column::Gender, &["Female"])
            .with(Column::Treatment, &["Yes"]);
        assert_eq!(apply(&table, &spec), vec![0, 1]);
    }

    #[test]
    fn allowed_set_is_a_union() {
        let table = fixtures::base_table();
        let spec = FilterSpec::all().with(Column::Country, &["Poland", "Australia"]);
        assert_eq!(apply(&table, &spec), vec![2, 3, 4]);
    }

    #[test]
    fn missing_values_fail_active_constraints() {
        let table = fixtures::base_table();
        let spec = FilterSpec::all().with(Column::SelfEmployed, &["No", "Yes"]);
        assert!(!apply(&table, &spec).contains(&1));
    }

    #[test]
    fn unknown_value_yields_empty_selection() {
        let table = fixtures::base_table();
        let spec = FilterSpec::all().with(Column::Country, &["Atlantis"]);
        assert!(apply(&table, &spec).is_empty());
    }
}
