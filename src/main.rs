//=========================================================================
// Velour — Demo Binary
//
// Runs the portfolio page against a headless stage: a real window for
// input and frame pacing, with every visual property write recorded by
// the stage instead of drawn. Point a renderer at the same Stage trait
// to see it for real.
//
// Usage:
//   velour_engine [path/to/content.json]
//
//=========================================================================

use std::process::ExitCode;

use log::{error, info};

use velour_engine::prelude::*;
use velour_engine::site;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let content_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/content.json".to_string());

    let content = match SiteContent::from_path(&content_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to load {}: {}", content_path, e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Loaded content: {} projects ({})",
        content.fr.projects.len(),
        content_path
    );

    let mut stage = HeadlessStage::new(1280.0, 720.0);
    let content_height = site::demo_layout(&mut stage, content.fr.projects.len());

    EngineBuilder::<SiteSurface, _>::new(content, stage)
        .with_window_title("Velour — Portfolio")
        .build()
        .init(|orchestrator| {
            orchestrator.set_content_height(content_height);
            site::install(orchestrator);
        })
        .run();

    ExitCode::SUCCESS
}
