use crate::sample::BeamSample;
use diagramx::{display_value, signed_area, DiagramSummary, RenderedDiagram, ResultKind};
use std::fmt::Write;

/// Human-readable name of a result kind.
fn kind_name(kind: ResultKind) -> &'static str {
    match kind {
        ResultKind::Force => "Force",
        ResultKind::Moment => "Bending moment",
        ResultKind::Shear => "Shear force",
        ResultKind::Axial => "Axial force",
        ResultKind::Torque => "Torsional moment",
    }
}

/// Render a textual description of one laid-out diagram.
///
/// Extremes are quoted in the drawn sign convention so they read the same as
/// the labels next to them.
#[must_use]
pub fn render_diagram(
    beam: &BeamSample,
    kind: ResultKind,
    diagram: &RenderedDiagram,
    summary: &DiagramSummary,
) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "{} diagram (span = {:.2} m, w = {:.1} N/m, {} samples)",
        kind_name(kind),
        beam.span,
        beam.load,
        diagram.scaled_values.len()
    )
    .expect("writing to string cannot fail");

    for (index, polygon) in diagram.polygons.iter().enumerate() {
        let (start, end) = match (polygon.first(), polygon.last()) {
            (Some(start), Some(end)) => (start.x, end.x),
            _ => continue,
        };
        writeln!(
            &mut output,
            "  region {}: x = {:.3} .. {:.3} m, {} points, area = {:+.3e}",
            index + 1,
            start,
            end,
            polygon.len(),
            signed_area(polygon)
        )
        .expect("writing to string cannot fail");
    }

    // The solver maximum is the drawn minimum and the other way round.
    if let (Some(low), Some(high)) = (summary.maximum, summary.minimum) {
        writeln!(
            &mut output,
            "  extremes: min {:+.1} at x = {:.3} m, max {:+.1} at x = {:.3} m",
            display_value(low.value),
            low.x,
            display_value(high.value),
            high.x
        )
        .expect("writing to string cannot fail");
    }

    if summary.zero_crossings.is_empty() {
        output.push_str("  zero crossings: none\n");
    } else {
        let stations: Vec<String> = summary
            .zero_crossings
            .iter()
            .map(|x| format!("{x:.3}"))
            .collect();
        writeln!(&mut output, "  zero crossings at x = {} m", stations.join(", "))
            .expect("writing to string cannot fail");
    }

    for label in &diagram.labels {
        writeln!(
            &mut output,
            "    {:>14} @ ({:.3}, {:.3})",
            label.text, label.x, label.y
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagramx::{render_member_diagram, DiagramConfig, UnitSystem};

    #[test]
    fn describes_shear_diagram() {
        let beam = BeamSample::default();
        let shears = beam.shears();
        let config = DiagramConfig {
            kind: Some(ResultKind::Shear),
            unit_system: Some(UnitSystem::Si),
            scale: Some(1.0e-4),
            ..DiagramConfig::default()
        };
        let diagram = render_member_diagram(&shears, beam.dist(), &config).expect("valid");
        let summary = DiagramSummary::from_values(&shears, beam.dist()).expect("valid");

        let report = render_diagram(&beam, ResultKind::Shear, &diagram, &summary);
        assert!(report.contains("Shear force diagram"));
        assert!(report.contains("region 2"));
        assert!(report.contains("+36.00 kN"));
        assert!(report.contains("max +36000.0 at x = 0.000 m"));
    }

    #[test]
    fn reports_missing_crossings() {
        let beam = BeamSample::default();
        let moments = beam.moments();
        let diagram =
            render_member_diagram(&moments, beam.dist(), &DiagramConfig::default()).expect("valid");
        let summary = DiagramSummary::from_values(&moments, beam.dist()).expect("valid");

        let report = render_diagram(&beam, ResultKind::Moment, &diagram, &summary);
        assert!(report.contains("Bending moment diagram"));
        assert!(report.contains("zero crossings: none"));
        assert!(report.contains("+54000.0"));
    }
}
