//! Train command implementation
//!
//! Fits the volume regressor and reports held-out metrics.

use std::fs;
use std::path::Path;

use tracing::info;
use trade_model::{PipelineConfig, RegressionPipeline, TrainedModel};

use crate::config::CliConfig;
use crate::Result;

/// Held-out pairs echoed after training.
const SAMPLE_PREDICTIONS: usize = 5;

/// Run the train command
pub fn run(
    input: Option<&Path>,
    seed: u64,
    trees: usize,
    mapping_out: Option<&Path>,
    config: &CliConfig,
) -> Result<()> {
    info!("Training volume regressor...");
    info!("  Seed: {}", seed);
    info!("  Trees: {}", trees);

    let dataset = super::resolve_dataset(input, config)?;
    let pipeline = RegressionPipeline::new(PipelineConfig::default().with_seed(seed).with_n_trees(trees))?;
    let model = pipeline.train(&dataset)?;

    print!("{}", render(&model));

    if let Some(path) = mapping_out {
        fs::write(path, serde_json::to_string_pretty(&model.mapping)?)?;
        info!("Category mapping written to {}", path.display());
    }
    Ok(())
}

fn render(model: &TrainedModel) -> String {
    let mut out = format!(
        "Rows: {} train / {} test\nR-squared: {:.4}\nMAE (USD): {:.2}\n\nFeature importances:\n",
        model.train_size, model.test_size, model.r_squared, model.mean_absolute_error
    );
    for (name, importance) in &model.feature_importances {
        out.push_str(&format!("  {:<18} {:.4}\n", name, importance));
    }
    out.push_str("\nSample predictions (actual, predicted):\n");
    for (actual, predicted) in model.predictions.iter().take(SAMPLE_PREDICTIONS) {
        out.push_str(&format!("  {:>12.2} {:>12.2}\n", actual, predicted));
    }
    out
}
