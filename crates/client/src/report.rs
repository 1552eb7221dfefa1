//! Writes decisions to stdout.
use std::io::Write;

use anyhow::Result;
use hunt_runtime::{DecisionStage, TargetDecision};

use crate::config::OutputFormat;

pub fn write_decision<W: Write>(
    out: &mut W,
    format: OutputFormat,
    step: usize,
    decision: &TargetDecision,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", describe(step, decision))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, decision)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn describe(step: usize, decision: &TargetDecision) -> String {
    let stage = match decision.stage {
        DecisionStage::SoleCandidate => "only goal".to_string(),
        DecisionStage::Rating => "highest rating".to_string(),
        DecisionStage::Elimination(factor) => format!("{} tie-break", factor.abbreviation()),
        DecisionStage::Random => "random draw".to_string(),
    };
    format!(
        "step {:>2}: goal #{} at {} ({}) ratings={:?}",
        step, decision.index, decision.goal.position, stage, decision.ratings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::{Factor, GoalSpot, Position};

    fn decision(stage: DecisionStage) -> TargetDecision {
        TargetDecision {
            goal: GoalSpot::new(Position::new(3, 2), 14, 5),
            index: 1,
            stage,
            ratings: vec![4, 9],
        }
    }

    #[test]
    fn text_line_names_the_stage() {
        let mut out = Vec::new();
        write_decision(
            &mut out,
            OutputFormat::Text,
            2,
            &decision(DecisionStage::Elimination(Factor::SpotDistance)),
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(
            line,
            "step  2: goal #1 at [3,2] (SD tie-break) ratings=[4, 9]\n"
        );
    }

    #[test]
    fn json_line_is_one_object() {
        let mut out = Vec::new();
        write_decision(&mut out, OutputFormat::Json, 1, &decision(DecisionStage::Rating)).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(line.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["stage"], "rating");
        assert_eq!(value["index"], 1);
        assert_eq!(value["goal"]["position"]["x"], 3);
    }
}
