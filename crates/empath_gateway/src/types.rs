use serde::{Deserialize, Serialize};

/// Inbound analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text input to classify.
    pub input: String,
}

/// Outbound reply. The body is intentionally just the selected response
/// string; tallies and percentages stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub response: String,
}
