//! The three-way verdict produced at the end of one pipeline run.

use serde::{Deserialize, Serialize};

use crate::llm::StageReply;

/// The literal substring whose presence in the reviewer's reply is the
/// sole approval signal. Matching is substring containment, not equality.
pub const APPROVAL_MARKER: &str = "REFACTORED CODE APPROVED";

/// Classification of the reviewer's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The reviewer produced no usable output; the refactor text is kept
    /// as the printed fallback.
    NoResponse { refactor: String },
    /// The reviewer's reply contains the approval marker.
    Approved { review: String },
    /// The reviewer replied without the marker; both texts are kept, in
    /// refactor-then-review order.
    Rejected { refactor: String, review: String },
}

impl Verdict {
    /// Classify the reviewer's reply against the approval marker.
    ///
    /// `refactor` is the architect stage's forwarded text (possibly empty
    /// when that stage failed); it becomes the fallback or rejection
    /// context.
    pub fn classify(refactor: &str, review: &StageReply) -> Verdict {
        let text = match review {
            StageReply::Failed(_) => {
                return Verdict::NoResponse {
                    refactor: refactor.to_string(),
                };
            }
            StageReply::Text(text) => text,
        };

        if text.trim().is_empty() {
            Verdict::NoResponse {
                refactor: refactor.to_string(),
            }
        } else if text.contains(APPROVAL_MARKER) {
            Verdict::Approved {
                review: text.clone(),
            }
        } else {
            Verdict::Rejected {
                refactor: refactor.to_string(),
                review: text.clone(),
            }
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoResponse { .. } => "no_response",
            Verdict::Approved { .. } => "approved",
            Verdict::Rejected { .. } => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;

    #[test]
    fn test_marker_is_substring_match() {
        let review = StageReply::Text(
            "Looks solid overall.\nREFACTORED CODE APPROVED\nShip it.".to_string(),
        );
        let verdict = Verdict::classify("fn f() {}", &review);
        assert!(matches!(verdict, Verdict::Approved { .. }));
    }

    #[test]
    fn test_misspelled_marker_rejects() {
        let review = StageReply::Text("REFACTORED CODE APPORVED".to_string());
        let verdict = Verdict::classify("fn f() {}", &review);
        assert!(matches!(verdict, Verdict::Rejected { .. }));
    }

    #[test]
    fn test_empty_review_is_no_response_with_fallback() {
        let review = StageReply::Text(String::new());
        let verdict = Verdict::classify("the architect's text", &review);
        assert_eq!(
            verdict,
            Verdict::NoResponse {
                refactor: "the architect's text".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_only_review_is_no_response() {
        let review = StageReply::Text("  \n\t ".to_string());
        let verdict = Verdict::classify("fallback", &review);
        assert!(matches!(verdict, Verdict::NoResponse { .. }));
    }

    #[test]
    fn test_failed_review_is_no_response() {
        let review = StageReply::Failed(LlmError::Api("HTTP 500: boom".to_string()));
        let verdict = Verdict::classify("fallback", &review);
        assert_eq!(
            verdict,
            Verdict::NoResponse {
                refactor: "fallback".to_string()
            }
        );
    }

    #[test]
    fn test_rejection_keeps_both_texts_in_order() {
        let review = StageReply::Text("Needs more tests before I can sign off.".to_string());
        let verdict = Verdict::classify("refactored body", &review);
        match verdict {
            Verdict::Rejected { refactor, review } => {
                assert_eq!(refactor, "refactored body");
                assert_eq!(review, "Needs more tests before I can sign off.");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_approval_with_empty_refactor() {
        // The architect stage may have failed; approval still stands on the
        // reviewer's text alone.
        let review = StageReply::Text(APPROVAL_MARKER.to_string());
        let verdict = Verdict::classify("", &review);
        assert!(matches!(verdict, Verdict::Approved { .. }));
    }

    #[test]
    fn test_verdict_serde_tag() {
        let verdict = Verdict::Approved {
            review: "ok. REFACTORED CODE APPROVED".to_string(),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["outcome"], "approved");

        let verdict = Verdict::NoResponse {
            refactor: "text".to_string(),
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["outcome"], "no_response");
        assert_eq!(json["refactor"], "text");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            Verdict::NoResponse {
                refactor: String::new()
            }
            .label(),
            "no_response"
        );
        assert_eq!(
            Verdict::Approved {
                review: String::new()
            }
            .label(),
            "approved"
        );
        assert_eq!(
            Verdict::Rejected {
                refactor: String::new(),
                review: String::new()
            }
            .label(),
            "rejected"
        );
    }
}
