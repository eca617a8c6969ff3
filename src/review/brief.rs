//! Product review brief
//!
//! The brief is the intake metadata a product owner fills in before a review:
//! what the product is, which areas reviewers care about, and which screens
//! were uploaded. It also renders the instructions for the voice reviewer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of uploaded screen files
pub const MAX_FILES: usize = 5;

/// Minimum length of the product name and field
const MIN_NAME_LEN: usize = 2;

/// Areas a review group can focus on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestField {
    Ui,
    Functionality,
    Performance,
    Security,
    Accessibility,
}

impl InterestField {
    pub fn label(self) -> &'static str {
        match self {
            InterestField::Ui => "UI/UX",
            InterestField::Functionality => "Functionality",
            InterestField::Performance => "Performance",
            InterestField::Security => "Security",
            InterestField::Accessibility => "Accessibility",
        }
    }
}

/// What the reviewer is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewType {
    LivePreview,
    #[default]
    StaticImage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBrief {
    pub product_name: String,
    pub product_field: String,
    pub interest_fields: Vec<InterestField>,
    pub screen_count: u32,
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub review_type: ReviewType,
    #[serde(default)]
    pub product_info: String,
}

/// A rule the brief violates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BriefIssue {
    #[error("product name must be at least {} characters", MIN_NAME_LEN)]
    ProductNameTooShort,
    #[error("product field must be at least {} characters", MIN_NAME_LEN)]
    ProductFieldTooShort,
    #[error("at least one interest field is required")]
    NoInterestFields,
    #[error("the number of screens is required")]
    NoScreens,
    #[error("at most {} files can be uploaded (got {})", MAX_FILES, .0)]
    TooManyFiles(usize),
    #[error("{} is not an image file", .0.display())]
    NotAnImage(PathBuf),
}

impl ReviewBrief {
    /// Read and validate a brief from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read review brief: {}", path.display()))?;
        let brief: ReviewBrief = serde_json::from_str(&json)
            .with_context(|| format!("Malformed review brief: {}", path.display()))?;

        let issues = brief.validate();
        if !issues.is_empty() {
            let joined = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            anyhow::bail!("Invalid review brief {}: {joined}", path.display());
        }
        Ok(brief)
    }

    /// Every rule the brief violates, in field order
    pub fn validate(&self) -> Vec<BriefIssue> {
        let mut issues = Vec::new();
        if self.product_name.trim().chars().count() < MIN_NAME_LEN {
            issues.push(BriefIssue::ProductNameTooShort);
        }
        if self.product_field.trim().chars().count() < MIN_NAME_LEN {
            issues.push(BriefIssue::ProductFieldTooShort);
        }
        if self.interest_fields.is_empty() {
            issues.push(BriefIssue::NoInterestFields);
        }
        if self.screen_count == 0 {
            issues.push(BriefIssue::NoScreens);
        }
        if self.files.len() > MAX_FILES {
            issues.push(BriefIssue::TooManyFiles(self.files.len()));
        }
        issues.extend(
            self.files
                .iter()
                .filter(|f| image::ImageFormat::from_path(f).is_err())
                .map(|f| BriefIssue::NotAnImage(f.clone())),
        );
        issues
    }

    /// Interest field labels joined for display
    pub fn interests(&self) -> String {
        self.interest_fields
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Instructions for the voice reviewer
    pub fn prompt_text(&self) -> String {
        let feature = match self.review_type {
            ReviewType::LivePreview => "a live preview feature",
            ReviewType::StaticImage => "a static image feature",
        };
        format!(
            "<role>\n\
             You are conducting a product review: ask people how they feel about {name}. \
             The review group is interested in: {interests}. \
             Keep in mind that what the reviewer sees is {feature}. \
             Ask about the different features they see, let them finish before answering, \
             and keep responses short.\n\
             </role>\n\
             \n\
             <project_info>\n\
             {name} is a {field} product. {info}\n\
             </project_info>\n\
             \n\
             <stay_concise>\n\
             Be succinct. Respond to the most recent message with one idea per utterance, \
             in less than three sentences of under twenty words each.\n\
             </stay_concise>\n\
             \n\
             <voice_only_response_format>\n\
             Everything you say is spoken aloud. Never use markdown, lists, or anything \
             that is not normally said out loud.\n\
             </voice_only_response_format>\n\
             \n\
             <conclusion>\n\
             Greet the reviewer and thank them for helping before starting the review.\n\
             </conclusion>\n",
            name = self.product_name.trim(),
            interests = self.interests(),
            field = self.product_field.trim(),
            info = self.product_info.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> ReviewBrief {
        ReviewBrief {
            product_name: "Pocket".to_string(),
            product_field: "Finance".to_string(),
            interest_fields: vec![InterestField::Ui, InterestField::Security],
            screen_count: 5,
            files: vec![PathBuf::from("app-image1.png")],
            review_type: ReviewType::StaticImage,
            product_info: "Tracks spending.".to_string(),
        }
    }

    #[test]
    fn test_valid_brief_has_no_issues() {
        assert!(brief().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let bad = ReviewBrief {
            product_name: "P".to_string(),
            product_field: " ".to_string(),
            interest_fields: Vec::new(),
            screen_count: 0,
            files: (0..6).map(|n| PathBuf::from(format!("s{n}.png"))).collect(),
            ..brief()
        };
        assert_eq!(
            bad.validate(),
            vec![
                BriefIssue::ProductNameTooShort,
                BriefIssue::ProductFieldTooShort,
                BriefIssue::NoInterestFields,
                BriefIssue::NoScreens,
                BriefIssue::TooManyFiles(6),
            ]
        );
    }

    #[test]
    fn test_non_image_files_are_rejected() {
        let bad = ReviewBrief {
            files: vec![PathBuf::from("notes.txt"), PathBuf::from("shot.jpeg")],
            ..brief()
        };
        assert_eq!(
            bad.validate(),
            vec![BriefIssue::NotAnImage(PathBuf::from("notes.txt"))]
        );
    }

    #[test]
    fn test_prompt_mentions_product_and_interests() {
        let text = brief().prompt_text();
        assert!(text.contains("Pocket"));
        assert!(text.contains("UI/UX, Security"));
        assert!(text.contains("a static image feature"));

        let live = ReviewBrief {
            review_type: ReviewType::LivePreview,
            ..brief()
        };
        assert!(live.prompt_text().contains("a live preview feature"));
    }

    #[test]
    fn test_load_parses_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.json");
        std::fs::write(
            &path,
            r#"{
                "productName": "Pocket",
                "productField": "Finance",
                "interestFields": ["ui", "performance"],
                "screenCount": 3,
                "reviewType": "livePreview"
            }"#,
        )
        .unwrap();

        let loaded = ReviewBrief::load(&path).unwrap();
        assert_eq!(
            loaded.interest_fields,
            [InterestField::Ui, InterestField::Performance]
        );
        assert_eq!(loaded.review_type, ReviewType::LivePreview);
        assert!(loaded.files.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_brief() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brief.json");
        std::fs::write(
            &path,
            r#"{"productName": "P", "productField": "Finance", "interestFields": [], "screenCount": 1}"#,
        )
        .unwrap();

        let err = ReviewBrief::load(&path).unwrap_err().to_string();
        assert!(err.contains("product name"));
        assert!(err.contains("interest field"));
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            BriefIssue::ProductNameTooShort.to_string(),
            "product name must be at least 2 characters"
        );
        assert_eq!(
            BriefIssue::TooManyFiles(6).to_string(),
            "at most 5 files can be uploaded (got 6)"
        );
        assert_eq!(
            BriefIssue::NotAnImage(PathBuf::from("notes.txt")).to_string(),
            "notes.txt is not an image file"
        );
    }
}
