//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Customer churn risk scoring CLI backed by a pre-trained classifier
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the model artifact (JSON)
    #[arg(short, long, default_value = "model.json")]
    pub model: String,

    /// Path to the input CSV file for batch scoring
    #[arg(short, long, default_value = "customers.csv")]
    pub input: String,

    /// Output path for the risk distribution chart
    #[arg(short, long, default_value = "risk_distribution.png")]
    pub output: String,

    /// Prediction mode: provide feature values as comma-separated string,
    /// in contract order.
    /// Example: --predict "0,0.2,500,5,3,2,4,1"
    #[arg(short, long)]
    pub predict: Option<String>,

    /// Emit the scoring response as raw JSON (prediction mode)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse feature values from the predict string.
    ///
    /// The count is not checked here; the scoring pipeline validates the
    /// vector length against the model's feature contract.
    pub fn parse_feature_values(&self) -> crate::Result<Option<Vec<f64>>> {
        if let Some(ref predict_str) = self.predict {
            let values = predict_str
                .split(',')
                .map(|part| {
                    part.trim()
                        .parse::<f64>()
                        .map_err(|_| anyhow::anyhow!("Invalid feature value: {}", part))
                })
                .collect::<crate::Result<Vec<f64>>>()?;
            Ok(Some(values))
        } else {
            Ok(None)
        }
    }
}
