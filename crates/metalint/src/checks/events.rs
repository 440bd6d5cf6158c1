//! Summarizing the findings of one event.

use crate::finding::Finding;

/// Collapses missing actor, place and date into one finding.
pub struct EventSummarizer;

impl EventSummarizer {
    /// Replace `MissingActor`, `MissingPlace` and `MissingDate` for
    /// `event_type` with a single `MissingEventInfo`, but only when all
    /// three are present. Other findings keep their order.
    pub fn summarize(findings: Vec<Finding>, event_type: &str) -> Vec<Finding> {
        let is_gap = |finding: &Finding| match finding {
            Finding::MissingActor { event_type: t }
            | Finding::MissingPlace { event_type: t }
            | Finding::MissingDate { event_type: t } => t == event_type,
            _ => false,
        };

        let complete = [
            Finding::missing_actor(event_type),
            Finding::missing_place(event_type),
            Finding::missing_date(event_type),
        ]
        .iter()
        .all(|gap| findings.contains(gap));
        if !complete {
            return findings;
        }

        let mut summarized = Vec::with_capacity(findings.len());
        let mut collapsed = false;
        for finding in findings {
            if !is_gap(&finding) {
                summarized.push(finding);
            } else if !collapsed {
                summarized.push(Finding::missing_event_info(event_type));
                collapsed = true;
            }
        }
        summarized
    }
}
