use crate::dataset::derived::DerivedTable;
use common::model::column::Column;
use rayon::prelude::*;

/// Absolute Pearson correlation between every pair of numeric columns.
///
/// `None` marks a pair that cannot be correlated: fewer than two shared
/// observations or zero variance on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<Column>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    #[cfg(test)]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Display copy with every cell below `threshold` hidden. `self` is left untouched.
    pub fn masked(&self, threshold: f64) -> Vec<Vec<Option<f64>>> {
        self.values
            .iter()
            .map(|row| row.iter().map(|v| v.filter(|r| *r >= threshold)).collect())
            .collect()
    }
}

pub fn correlation_matrix(table: &DerivedTable) -> CorrelationMatrix {
    let columns = table.numeric_columns();
    let series: Vec<&[Option<f64>]> = columns
        .iter()
        .filter_map(|&c| table.numeric(c))
        .collect();

    // r is symmetric: compute row i from the diagonal rightwards, then mirror.
    let n = series.len();
    let upper: Vec<Vec<Option<f64>>> = (0..n)
        .into_par_iter()
        .map(|i| {
            (i..n)
                .map(|j| pearson(series[i], series[j]).map(f64::abs))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut values = vec![vec![None; n]; n];
    for (i, row) in upper.into_iter().enumerate() {
        for (offset, r) in row.into_iter().enumerate() {
            let j = i + offset;
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

/// Pearson coefficient over the rows where both series have a value.
pub fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs = || {
        a.iter()
            .zip(b.iter())
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
    };

    let (n, sum_x, sum_y) = pairs().fold((0usize, 0.0, 0.0), |(n, sx, sy), (x, y)| {
        (n + 1, sx + x, sy + y)
    });
    if n < 2 {
        return None;
    }

    let mean_x = sum_x / n as f64;
    let mean_y = sum_y / n as f64;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in pairs() {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;

    fn index_of(m: &CorrelationMatrix, c: Column) -> usize {
        m.columns.iter().position(|&x| x == c).unwrap()
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let m = correlation_matrix(&fixtures::derived_table());
        assert_eq!(m.columns.len(), 13);
        for i in 0..m.columns.len() {
            for j in 0..m.columns.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
            if let Some(d) = m.get(i, i) {
                assert!((d - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn values_are_absolute() {
        let m = correlation_matrix(&fixtures::derived_table());
        let t = index_of(&m, Column::Treatment);
        let c = index_of(&m, Column::CopingStruggles);
        // Coping_Struggles is exactly the opposite of treatment in the fixture.
        assert!((m.get(t, c).unwrap() - 1.0).abs() < 1e-9);
        assert!(m.values.iter().flatten().flatten().all(|v| *v >= 0.0));
    }

    #[test]
    fn masking_hides_cells_but_keeps_matrix() {
        let m = correlation_matrix(&fixtures::derived_table());
        let before = m.clone();
        let masked = m.masked(0.5);
        for (i, row) in masked.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                match m.get(i, j) {
                    Some(v) if v >= 0.5 => assert_eq!(*cell, Some(v)),
                    _ => assert_eq!(*cell, None),
                }
            }
        }
        assert_eq!(m, before);
    }

    #[test]
    fn every_cell_matches_pairwise_pearson() {
        let table = fixtures::derived_table();
        let m = correlation_matrix(&table);
        for (i, &a) in m.columns.iter().enumerate() {
            for (j, &b) in m.columns.iter().enumerate() {
                let expected = pearson(table.numeric(a).unwrap(), table.numeric(b).unwrap())
                    .map(f64::abs);
                assert_eq!(m.get(i, j), expected, "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn zero_variance_is_undefined() {
        let a = [Some(1.0), Some(1.0), Some(1.0)];
        let b = [Some(1.0), Some(2.0), Some(3.0)];
        assert_eq!(pearson(&a, &b), None);
    }

    #[test]
    fn uses_pairwise_complete_rows() {
        let a = [Some(1.0), None, Some(2.0), Some(3.0)];
        let b = [Some(2.0), Some(9.0), Some(4.0), Some(6.0)];
        assert!((pearson(&a, &b).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(pearson(&[Some(1.0), None], &[None, Some(1.0)]), None);
    }
}
