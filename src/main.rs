//! ChurnScope: Customer churn risk scoring CLI
//!
//! This is the main entrypoint that orchestrates model loading, single-customer
//! prediction, batch scoring, and visualization.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use churnscope::{load_customer_batch, viz, Args, LogisticModel, ScoringPipeline};
use clap::Parser;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.verbose {
        println!("ChurnScope - Customer Churn Risk Scoring");
        println!("========================================\n");
    }

    // Load the model artifact and derive the feature contract from it
    let model = LogisticModel::load(&args.model)
        .with_context(|| format!("Failed to load model artifact from {}", args.model))?;
    let contract = model.contract();

    if args.verbose {
        println!("Loaded model: {}", model.model_name);
        println!("Feature contract: {} features", contract.feature_count());
    }

    let pipeline = ScoringPipeline::new(Arc::new(model), contract);

    // Check if in prediction mode
    if let Some(vector) = args.parse_feature_values()? {
        run_prediction_mode(&args, &pipeline, &vector)?;
    } else {
        run_batch_pipeline(&args, &pipeline)?;
    }

    Ok(())
}

/// Score a single customer from the command line
fn run_prediction_mode(args: &Args, pipeline: &ScoringPipeline, vector: &[f64]) -> Result<()> {
    let start_time = Instant::now();

    let response = pipeline.score(vector)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("=== Prediction Mode ===");
    if args.verbose {
        println!("\nInput features:");
        for (name, value) in pipeline.contract().named(vector).iter() {
            println!("  {}: {}", name, value);
        }
    }

    let elapsed = start_time.elapsed();

    println!(
        "\n✓ Prediction: {}",
        if response.prediction == 1 {
            "Likely to Churn"
        } else {
            "No churn"
        }
    );
    println!(
        "  Churn probability: {:.2}%",
        response.churn_probability * 100.0
    );
    println!("  Risk segment: {}", response.risk_segment);
    if args.verbose {
        println!("  Processing time: {:.3}s", elapsed.as_secs_f64());
    }

    println!("\nExecutive summary:");
    println!("  {}", response.message);
    println!("\nExplanation of prediction:");
    println!("  {}", response.churn_reason);
    println!("\nRecommended retention strategy:");
    println!("  {}", response.recommended_strategy);

    Ok(())
}

/// Score every customer in the input CSV and summarize the results
fn run_batch_pipeline(args: &Args, pipeline: &ScoringPipeline) -> Result<()> {
    println!("=== Batch Scoring Pipeline ===\n");

    let start_time = Instant::now();

    // Step 1: Load customer rows
    if args.verbose {
        println!("Step 1: Loading customer data");
        println!("  Input file: {}", args.input);
    }

    let data_start = Instant::now();
    let batch = load_customer_batch(&args.input, pipeline.contract())
        .with_context(|| format!("Failed to load customer data from {}", args.input))?;
    let data_time = data_start.elapsed();

    println!("✓ Data loaded: {} customers", batch.len());
    if args.verbose {
        println!("  Processing time: {:.2}s", data_time.as_secs_f64());
        println!("  Features shape: {:?}", batch.features.shape());
    }

    // Step 2: Score every row through the pipeline
    if args.verbose {
        println!("\nStep 2: Scoring customers with model {}", pipeline.model_name());
    }

    let scoring_start = Instant::now();
    let mut responses = Vec::with_capacity(batch.len());
    for (i, &customer_id) in batch.customer_ids.iter().enumerate() {
        let response = pipeline
            .score(&batch.row(i))
            .with_context(|| format!("Failed to score customer {}", customer_id))?;
        responses.push(response);
    }
    let scoring_time = scoring_start.elapsed();

    println!("✓ Scored {} customers", responses.len());
    if args.verbose {
        println!("  Scoring time: {:.2}s", scoring_time.as_secs_f64());
    }

    // Step 3: Summarize and visualize
    viz::print_batch_summary(&batch.customer_ids, &responses);

    let viz_start = Instant::now();
    viz::create_risk_distribution_chart(&responses, &args.output)?;
    let viz_time = viz_start.elapsed();

    if args.verbose {
        println!("  Visualization time: {:.2}s", viz_time.as_secs_f64());
    }

    let total_time = start_time.elapsed();
    println!("\n=== Pipeline Complete ===");
    println!("Scored at: {}", Utc::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Total processing time: {:.2}s", total_time.as_secs_f64());
    println!("Risk distribution saved to: {}", args.output);

    Ok(())
}
