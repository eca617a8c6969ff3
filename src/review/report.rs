//! Delivery of finished feedback to the surrounding review session

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::domain::{AnnotationSet, FeedbackPoint};

/// Receives the feedback collected during a session
pub trait ReviewSink {
    fn deliver(&mut self, feedback: &AnnotationSet) -> anyhow::Result<()>;
}

/// Logs a per-screen summary
#[derive(Debug, Default)]
pub struct LogSink;

impl ReviewSink for LogSink {
    fn deliver(&mut self, feedback: &AnnotationSet) -> anyhow::Result<()> {
        if feedback.is_empty() {
            log::info!("Review finished without comments");
            return Ok(());
        }
        for screen in &feedback.screens {
            if screen.points.is_empty() {
                continue;
            }
            log::info!(
                "Screen {}: {} comment(s)",
                screen.ordinal + 1,
                screen.points.len()
            );
            for point in &screen.points {
                log::debug!("  ({:.0}, {:.0}) {}", point.x, point.y, point.text);
            }
        }
        Ok(())
    }
}

/// Writes the feedback as a JSON document
#[derive(Debug, Clone)]
pub struct JsonReport {
    path: PathBuf,
    product_name: Option<String>,
    images: Vec<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    product_name: Option<&'a str>,
    finished_at: String,
    total: usize,
    screens: Vec<ReportScreen<'a>>,
}

#[derive(Serialize)]
struct ReportScreen<'a> {
    ordinal: usize,
    image: Option<&'a Path>,
    points: &'a [FeedbackPoint],
}

impl JsonReport {
    /// `images` are the screen image paths in screen order
    pub fn new(path: PathBuf, product_name: Option<String>, images: Vec<PathBuf>) -> Self {
        Self {
            path,
            product_name,
            images,
        }
    }

    fn render(&self, feedback: &AnnotationSet) -> anyhow::Result<String> {
        let report = Report {
            product_name: self.product_name.as_deref(),
            finished_at: chrono::Local::now().to_rfc3339(),
            total: feedback.total(),
            screens: feedback
                .screens
                .iter()
                .map(|s| ReportScreen {
                    ordinal: s.ordinal,
                    image: self.images.get(s.ordinal).map(PathBuf::as_path),
                    points: &s.points,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl ReviewSink for JsonReport {
    fn deliver(&mut self, feedback: &AnnotationSet) -> anyhow::Result<()> {
        let json = self.render(feedback)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

        // Write next to the target and rename so a crash never leaves half a report
        let mut file = tempfile::Builder::new()
            .prefix(".screenreview-")
            .suffix(".json")
            .tempfile_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(&self.path)
            .with_context(|| format!("Failed to write report: {}", self.path.display()))?;

        log::info!(
            "Wrote {} feedback point(s) to {}",
            feedback.total(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::store::AnnotationStore;

    fn feedback() -> AnnotationSet {
        let mut store = AnnotationStore::new(3);
        store.add(0, 40.0, 60.0, "move button up");
        store.add(2, 1.0, 2.0, "typo in header");
        store.snapshot()
    }

    #[test]
    fn test_json_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let images = vec![
            PathBuf::from("app-image1.png"),
            PathBuf::from("app-image2.png"),
            PathBuf::from("app-image3.png"),
        ];
        let mut sink = JsonReport::new(path.clone(), Some("Pocket".to_string()), images);
        sink.deliver(&feedback()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["product_name"], "Pocket");
        assert_eq!(value["total"], 2);
        assert_eq!(value["screens"][0]["image"], "app-image1.png");
        assert_eq!(value["screens"][0]["points"][0]["text"], "move button up");
        assert_eq!(value["screens"][0]["points"][0]["x"], 40.0);
        assert_eq!(value["screens"][1]["points"].as_array().unwrap().len(), 0);
        assert_eq!(value["screens"][2]["points"][0]["text"], "typo in header");
    }

    #[test]
    fn test_json_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "stale").unwrap();

        let mut sink = JsonReport::new(path.clone(), None, Vec::new());
        sink.deliver(&AnnotationSet::default()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total"], 0);
        assert!(value["product_name"].is_null());
    }

    #[test]
    fn test_log_sink_accepts_anything() {
        assert!(LogSink.deliver(&feedback()).is_ok());
    }
}
