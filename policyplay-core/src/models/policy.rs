use serde::{Deserialize, Serialize};

/// Policy as listed for players and admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySummary {
    #[serde(rename = "policyId", alias = "policy_id", default)]
    pub policy_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub rules_count: u32,
    #[serde(default)]
    pub clauses_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}

impl PolicySummary {
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.filename
        } else {
            &self.title
        }
    }
}

/// Structured extraction returned after an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredPolicy {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub clauses: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub policy_sections: Vec<String>,
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDeleted {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub deleted_game_sessions: u32,
}

/// Accepted upload extensions.
pub const UPLOAD_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Whether `filename` carries one of the accepted extensions.
#[must_use]
pub fn is_supported_upload(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| UPLOAD_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAnalysisRequest {
    pub draft_text: String,
    pub draft_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapNote {
    #[serde(default)]
    pub existing_policy: String,
    #[serde(default)]
    pub overlap_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAnalysis {
    #[serde(default)]
    pub contradictions: Vec<String>,
    #[serde(default)]
    pub missing_sections: Vec<String>,
    #[serde(default)]
    pub overlapping_content: Vec<OverlapNote>,
    #[serde(default)]
    pub ambiguous_phrases: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_id_accepts_both_spellings() {
        let camel: PolicySummary =
            serde_json::from_str(r#"{"policyId":"p1","title":"T","filename":"t.pdf"}"#).unwrap();
        let snake: PolicySummary =
            serde_json::from_str(r#"{"policy_id":"p1","title":"","filename":"t.pdf"}"#).unwrap();
        assert_eq!(camel.policy_id, "p1");
        assert_eq!(snake.policy_id, "p1");
        assert_eq!(snake.display_title(), "t.pdf");
    }

    #[test]
    fn upload_extension_check() {
        assert!(is_supported_upload("Handbook.PDF"));
        assert!(is_supported_upload("notes.txt"));
        assert!(is_supported_upload("a.b.docx"));
        assert!(!is_supported_upload("image.png"));
        assert!(!is_supported_upload("noext"));
    }
}
