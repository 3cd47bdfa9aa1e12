//! Visualization functions using Plotters for batch scoring results

use plotters::prelude::*;

use crate::pipeline::ScoringResponse;
use crate::risk::{segment, RiskTier};

/// Bar colors for Low, Medium, High tiers
const TIER_COLORS: [RGBColor; 3] = [GREEN, RGBColor(255, 165, 0), RED];

const TIER_NAMES: [&str; 3] = ["Low", "Medium", "High"];

/// Count responses per risk tier, ordered Low, Medium, High
pub fn tier_counts(responses: &[ScoringResponse]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for response in responses {
        match segment(response.churn_probability) {
            RiskTier::Low => counts[0] += 1,
            RiskTier::Medium => counts[1] += 1,
            RiskTier::High => counts[2] += 1,
        }
    }
    counts
}

/// Create a bar chart of customers per risk tier
///
/// # Arguments
/// * `responses` - Scored batch results
/// * `output_path` - Path to save the PNG plot
///
/// # Returns
/// * Result indicating success or failure
pub fn create_risk_distribution_chart(
    responses: &[ScoringResponse],
    output_path: &str,
) -> crate::Result<()> {
    let counts = tier_counts(responses);
    let max_count = *counts.iter().max().unwrap_or(&1) as f64;

    let root = BitMapBackend::new(output_path, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Churn Risk Distribution", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..3f64, 0f64..(max_count * 1.1).max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Risk Tier")
        .y_desc("Number of Customers")
        .x_labels(3)
        .x_label_formatter(&|x| {
            let idx = *x as usize;
            if idx < TIER_NAMES.len() {
                TIER_NAMES[idx].to_string()
            } else {
                String::new()
            }
        })
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // Draw bars for each tier
    for (tier_idx, &count) in counts.iter().enumerate() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (tier_idx as f64 + 0.1, 0.0),
                (tier_idx as f64 + 0.9, count as f64),
            ],
            TIER_COLORS[tier_idx].filled(),
        )))?;
    }

    root.present()?;
    println!("Risk distribution chart saved to: {}", output_path);

    Ok(())
}

/// Print batch scoring statistics to console
pub fn print_batch_summary(customer_ids: &[i64], responses: &[ScoringResponse]) {
    println!("\n=== Batch Scoring Summary ===");
    println!("Total customers scored: {}", responses.len());

    let counts = tier_counts(responses);
    println!("\nRisk tier breakdown:");
    for (name, &count) in TIER_NAMES.iter().zip(counts.iter()) {
        let percentage = if responses.is_empty() {
            0.0
        } else {
            (count as f64 / responses.len() as f64) * 100.0
        };
        println!("  {}: {} customers ({:.1}%)", name, count, percentage);
    }

    let high_risk: Vec<(&i64, &ScoringResponse)> = customer_ids
        .iter()
        .zip(responses.iter())
        .filter(|(_, r)| segment(r.churn_probability) == RiskTier::High)
        .collect();

    if !high_risk.is_empty() {
        println!("\nHigh risk customers:");
        for (id, response) in high_risk {
            println!(
                "  Customer {} | probability {:.2}% | {}",
                id,
                response.churn_probability * 100.0,
                response.message
            );
        }
    }
}
