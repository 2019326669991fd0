mod report;
mod sample;

use diagramx::{render_member_diagram, DiagramConfig, DiagramSummary, ResultKind, UnitSystem};
use report::render_diagram;
use sample::BeamSample;
use std::error::Error;
use tracing::{info, Level};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Display settings come from an optional JSON file; the kind is chosen per
    // diagram below.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading diagram settings");
            DiagramConfig::from_json_str(&std::fs::read_to_string(path)?)?
        }
        None => DiagramConfig {
            scale: Some(1.0e-4),
            unit_system: Some(UnitSystem::Si),
            ..DiagramConfig::default()
        },
    };

    let beam = BeamSample::default();
    let dist = beam.dist();
    for (kind, values) in [
        (ResultKind::Moment, beam.moments()),
        (ResultKind::Shear, beam.shears()),
    ] {
        let config = DiagramConfig {
            kind: Some(kind),
            ..config.clone()
        };
        let diagram = render_member_diagram(&values, dist, &config)?;
        let summary = DiagramSummary::from_values(&values, dist)?;
        println!("{}", render_diagram(&beam, kind, &diagram, &summary));
    }

    Ok(())
}
