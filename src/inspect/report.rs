//! Report types for single-sample inspection and terminal formatting.

use std::fmt;

use serde::Serialize;

use crate::config::TransformConfig;
use crate::sample::ImageDims;
use crate::transform::FlipDecision;

/// The chosen scale and output size for one image size.
#[derive(Clone, Debug, Serialize)]
pub struct ScaleReport {
    pub config: TransformConfig,
    pub input: ImageDims,
    pub scale: f64,
    pub output: ImageDims,
}

/// What the transform pipeline did to one dataset sample.
#[derive(Clone, Debug, Serialize)]
pub struct SampleReport {
    /// Index of the sample in the source.
    pub index: usize,
    pub config: TransformConfig,
    pub original: ImageDims,
    pub resized: ImageDims,
    /// Resized height divided by original height.
    pub scale: f64,
    pub flip: FlipDecision,
    /// Mean of each normalized output channel (RGB).
    pub channel_means: [f64; 3],
    pub objects: Vec<ObjectRow>,
}

/// One annotated object before and after the transform.
#[derive(Clone, Debug, Serialize)]
pub struct ObjectRow {
    pub label: u32,
    /// Class name, if the source has a vocabulary.
    pub class_name: Option<String>,
    pub difficult: bool,
    /// `[y_min, x_min, y_max, x_max]` in original pixels.
    pub original: [f64; 4],
    /// `[y_min, x_min, y_max, x_max]` in resized pixels.
    pub transformed: [f64; 4],
}

impl fmt::Display for ScaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bounds:  min_size {} / max_size {}",
            self.config.min_size, self.config.max_size
        )?;
        writeln!(f, "Input:   {} x {}", self.input.height, self.input.width)?;
        writeln!(f, "Scale:   {:.6}", self.scale)?;
        writeln!(f, "Output:  {} x {}", self.output.height, self.output.width)
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample {}", self.index)?;
        writeln!(f, "  Original:  {} x {}", self.original.height, self.original.width)?;
        writeln!(f, "  Resized:   {} x {}", self.resized.height, self.resized.width)?;
        writeln!(f, "  Scale:     {:.6}", self.scale)?;
        writeln!(
            f,
            "  Flip:      {}",
            match (self.flip.x_flip, self.flip.y_flip) {
                (false, false) => "none",
                (true, false) => "horizontal",
                (false, true) => "vertical",
                (true, true) => "horizontal + vertical",
            }
        )?;
        writeln!(
            f,
            "  Channel means (normalized): {:.4} {:.4} {:.4}",
            self.channel_means[0], self.channel_means[1], self.channel_means[2]
        )?;
        writeln!(f)?;

        if self.objects.is_empty() {
            writeln!(f, "  No objects.")?;
            return Ok(());
        }

        writeln!(f, "  Objects ({}):", self.objects.len())?;
        for (i, object) in self.objects.iter().enumerate() {
            let name = object
                .class_name
                .clone()
                .unwrap_or_else(|| format!("class {}", object.label));
            let marker = if object.difficult { " (difficult)" } else { "" };
            writeln!(
                f,
                "    [{i}] {name}{marker}: {} -> {}",
                format_box(&object.original),
                format_box(&object.transformed)
            )?;
        }

        Ok(())
    }
}

fn format_box(coords: &[f64; 4]) -> String {
    format!("({:.1}, {:.1}, {:.1}, {:.1})", coords[0], coords[1], coords[2], coords[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_lists_objects_with_names() {
        let report = SampleReport {
            index: 0,
            config: TransformConfig::default(),
            original: (375, 500).into(),
            resized: (600, 800).into(),
            scale: 1.6,
            flip: FlipDecision::HORIZONTAL,
            channel_means: [0.0, 0.0, 0.0],
            objects: vec![ObjectRow {
                label: 8,
                class_name: Some("chair".to_string()),
                difficult: false,
                original: [210.0, 262.0, 338.0, 323.0],
                transformed: [336.0, 283.2, 540.8, 380.8],
            }],
        };

        let text = report.to_string();
        assert!(text.contains("Resized:   600 x 800"));
        assert!(text.contains("Flip:      horizontal"));
        assert!(text.contains("[0] chair: (210.0, 262.0, 338.0, 323.0)"));
    }

    #[test]
    fn scale_report_serializes_dims() {
        let report = ScaleReport {
            config: TransformConfig::default(),
            input: (1200, 800).into(),
            scale: 0.75,
            output: (900, 600).into(),
        };
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["output"]["height"], 900);
        assert_eq!(json["scale"], 0.75);
    }

    #[test]
    fn scale_report_text_has_one_line_per_field() {
        let report = ScaleReport {
            config: TransformConfig::default(),
            input: (1200, 800).into(),
            scale: 0.75,
            output: (900, 600).into(),
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Bounds:  min_size 600 / max_size 1000",
                "Input:   1200 x 800",
                "Scale:   0.750000",
                "Output:  900 x 600",
            ]
        );
    }
}
