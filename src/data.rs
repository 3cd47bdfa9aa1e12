//! Batch data loading: customer feature matrices from CSV using Polars

use ndarray::Array2;
use polars::prelude::*;

use crate::features::FeatureContract;

/// A batch of customers ready for scoring
#[derive(Debug)]
pub struct CustomerBatch {
    /// Feature values as ndarray (n_customers, feature_count), contract order
    pub features: Array2<f64>,
    /// Customer IDs corresponding to each row
    pub customer_ids: Vec<i64>,
}

impl CustomerBatch {
    pub fn len(&self) -> usize {
        self.customer_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customer_ids.is_empty()
    }

    /// Feature vector for one row, in contract order
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.features.row(index).to_vec()
    }
}

/// Load a CSV of customer rows whose columns match the feature contract.
///
/// Every contract feature must be present as a column; a `CustomerID`
/// column is used when available, otherwise rows are numbered from 1.
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `contract` - Feature contract of the loaded model
///
/// # Returns
/// * `CustomerBatch` with one feature row per customer
pub fn load_customer_batch(file_path: &str, contract: &FeatureContract) -> crate::Result<CustomerBatch> {
    let df = LazyCsvReader::new(file_path).finish()?.collect()?;

    if df.height() == 0 {
        anyhow::bail!("No customer rows found in {}", file_path);
    }

    let columns = df.get_column_names();
    for name in contract.names() {
        if !columns.contains(&name.as_str()) {
            anyhow::bail!("Missing feature column '{}' in {}", name, file_path);
        }
    }

    let n_samples = df.height();

    let customer_ids: Vec<i64> = if columns.contains(&"CustomerID") {
        df.column("CustomerID")?
            .cast(&DataType::Int64)?
            .i64()?
            .into_no_null_iter()
            .collect()
    } else {
        (1..=n_samples as i64).collect()
    };

    if customer_ids.len() != n_samples {
        anyhow::bail!("CustomerID column contains missing values in {}", file_path);
    }

    // Extract each feature column, then interleave row-wise
    let mut feature_columns: Vec<Vec<f64>> = Vec::with_capacity(contract.feature_count());
    for name in contract.names() {
        let values: Vec<f64> = df
            .column(name)?
            .cast(&DataType::Float64)?
            .f64()?
            .into_no_null_iter()
            .collect();

        if values.len() != n_samples {
            anyhow::bail!(
                "Feature column '{}' contains missing values in {}",
                name,
                file_path
            );
        }
        feature_columns.push(values);
    }

    let mut raw = Vec::with_capacity(n_samples * contract.feature_count());
    for i in 0..n_samples {
        for column in &feature_columns {
            raw.push(column[i]);
        }
    }

    let features = Array2::from_shape_vec((n_samples, contract.feature_count()), raw)?;

    Ok(CustomerBatch {
        features,
        customer_ids,
    })
}
