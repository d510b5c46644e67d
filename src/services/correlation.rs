//! Pearson correlation matrix over the declared numeric fields.

use serde::{Deserialize, Serialize};

use crate::models::DerivedRecord;

type FieldFn = fn(&DerivedRecord) -> f64;

/// Numeric fields entering the correlation matrix, in column order.
///
/// The list is declared explicitly (raw covariates plus derived calendar
/// fields) so the matrix shape never depends on runtime type inference.
/// Boolean fields enter as 0/1.
pub const NUMERIC_FIELDS: &[(&str, FieldFn)] = &[
    ("season", |r| r.season as f64),
    ("holiday", |r| r.holiday as u8 as f64),
    ("workingday", |r| r.workingday as u8 as f64),
    ("weather", |r| r.weather as f64),
    ("temp", |r| r.temp),
    ("atemp", |r| r.atemp),
    ("humidity", |r| r.humidity),
    ("windspeed", |r| r.windspeed),
    ("casual", |r| r.casual as f64),
    ("registered", |r| r.registered as f64),
    ("count", |r| r.count as f64),
    ("year", |r| r.year as f64),
    ("month", |r| r.month as f64),
    ("hour", |r| r.hour as f64),
    ("weekday", |r| r.weekday as f64),
];

/// Symmetric field-by-field correlation matrix.
///
/// `values[i][j]` is the Pearson correlation of fields `i` and `j`; entries
/// are NaN wherever the correlation is undefined (fewer than two rows, or a
/// constant field). NaN is a valid output here, not an error; the
/// presentation layer renders those cells as blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Field names, in both row and column order.
    pub fields: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Pearson correlation of two equally long samples.
///
/// NaN when fewer than two observations or either sample has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let n_f = n as f64;

    let mean_x = x[..n].iter().sum::<f64>() / n_f;
    let mean_y = y[..n].iter().sum::<f64>() / n_f;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

fn has_variance(values: &[f64]) -> bool {
    values.len() >= 2 && values.iter().any(|v| *v != values[0])
}

/// Full pairwise correlation matrix of [`NUMERIC_FIELDS`] over the view.
///
/// Diagonal entries are exactly 1.0 for fields with nonzero variance; a
/// constant field is NaN across its whole row and column, diagonal included
/// (the same convention pandas uses for `DataFrame.corr`).
pub fn correlation_matrix(records: &[DerivedRecord]) -> CorrelationMatrix {
    let columns: Vec<Vec<f64>> = NUMERIC_FIELDS
        .iter()
        .map(|(_, field)| records.iter().map(|r| field(r)).collect())
        .collect();

    let n = NUMERIC_FIELDS.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        for j in i..n {
            let value = if i == j {
                if has_variance(&columns[i]) {
                    1.0
                } else {
                    f64::NAN
                }
            } else {
                pearson(&columns[i], &columns[j])
            };
            values[i][j] = value;
            values[j][i] = value;
        }
    }

    CorrelationMatrix {
        fields: NUMERIC_FIELDS
            .iter()
            .map(|(name, _)| name.to_string())
            .collect(),
        values,
    }
}
