//! `livegate score` — offline liveness diagnostic for a still image.
//!
//! Treats the whole image as an already-validated face: preprocess,
//! classify, softmax, threshold. Useful for sanity-checking a model file
//! and for tuning the decision threshold against known captures.

use anyhow::{Context, Result};
use livegate_core::decision::softmax;
use livegate_core::preprocess::frame_to_tensor;
use livegate_core::{Frame, LivenessClassifier, PipelineConfig, Rotation};
use serde::Serialize;
use std::path::PathBuf;

/// Report printed for one scored image.
#[derive(Serialize)]
struct ScoreReport<'a> {
    image: &'a str,
    scores: [f32; 2],
    probabilities: [f32; 2],
    threshold: f32,
    live: bool,
}

pub fn run(
    image_path: &str,
    model: Option<String>,
    threshold: Option<f32>,
    json: bool,
) -> Result<()> {
    let config = PipelineConfig::from_env();
    let threshold = threshold.unwrap_or(config.live_threshold);

    let pixels = image::open(image_path)
        .with_context(|| format!("failed to open image {image_path}"))?
        .to_rgb8();
    let frame = Frame::new(pixels, Rotation::Deg0);
    let input = frame_to_tensor(&frame);

    let model_path = match model {
        Some(path) => PathBuf::from(path),
        None => {
            // Only the manifest model has a known checksum; user-supplied
            // paths are loaded as-is.
            let dir = crate::setup::default_model_dir();
            livegate_models::LIVENESS_MODEL.verify_in(&dir)?;
            livegate_models::LIVENESS_MODEL.path_in(&dir)
        }
    };
    let mut classifier = LivenessClassifier::load(&model_path.to_string_lossy())?;

    let scores = classifier.classify(&input)?;
    let probabilities = softmax(scores);
    let live = probabilities[config.live_class_index] > threshold;

    tracing::info!(
        image = image_path,
        live_probability = probabilities[config.live_class_index],
        threshold,
        live,
        "image scored"
    );

    let report = ScoreReport {
        image: image_path,
        scores,
        probabilities,
        threshold,
        live,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("image:         {image_path}");
        println!("raw scores:    [{:.4}, {:.4}]", scores[0], scores[1]);
        println!(
            "probabilities: [{:.4}, {:.4}]",
            probabilities[0], probabilities[1]
        );
        println!("decision:      {}", if live { "LIVE" } else { "NOT LIVE" });
    }

    Ok(())
}
