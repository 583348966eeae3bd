//! Per-resource outcomes of a configuration run.

use std::fmt;
use tracing::{info, warn};

/// Kind of NetBox object being configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Tag,
    Webhook,
    EventRule,
    Prefix,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Tag => "Tag",
            ResourceKind::Webhook => "Webhook",
            ResourceKind::EventRule => "Event rule",
            ResourceKind::Prefix => "Prefix",
        };
        f.write_str(label)
    }
}

/// What happened to one resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Created { id: u64 },
    AlreadyExists { id: Option<u64> },
    Failed { reason: String },
    Skipped { reason: String },
}

/// Outcome record for one resource, keyed by its natural key (name or CIDR)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutcome {
    pub kind: ResourceKind,
    pub key: String,
    pub status: OutcomeStatus,
}

impl ResourceOutcome {
    pub fn new(kind: ResourceKind, key: impl Into<String>, status: OutcomeStatus) -> Self {
        Self {
            kind,
            key: key.into(),
            status,
        }
    }

    /// NetBox ID of the resource, when one is known
    pub fn id(&self) -> Option<u64> {
        match self.status {
            OutcomeStatus::Created { id } => Some(id),
            OutcomeStatus::AlreadyExists { id } => id,
            OutcomeStatus::Failed { .. } | OutcomeStatus::Skipped { .. } => None,
        }
    }
}

/// Aggregate counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub already_existing: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} already existed, {} failed, {} skipped",
            self.created, self.already_existing, self.failed, self.skipped
        )
    }
}

/// Ordered list of outcomes, in the order resources were processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationReport {
    outcomes: Vec<ResourceOutcome>,
}

impl ConfigurationReport {
    pub fn push(&mut self, outcome: ResourceOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ResourceOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &ResourceOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Failed { .. }))
    }

    pub fn summary(&self) -> Summary {
        self.outcomes.iter().fold(Summary::default(), |mut summary, outcome| {
            match outcome.status {
                OutcomeStatus::Created { .. } => summary.created += 1,
                OutcomeStatus::AlreadyExists { .. } => summary.already_existing += 1,
                OutcomeStatus::Failed { .. } => summary.failed += 1,
                OutcomeStatus::Skipped { .. } => summary.skipped += 1,
            }
            summary
        })
    }

    /// Log the summary line and one line per failed or skipped resource
    pub fn log_summary(&self) {
        info!("Summary: {}", self.summary());
        for outcome in self.outcomes() {
            match &outcome.status {
                OutcomeStatus::Failed { reason } => warn!("  {} '{}' failed: {}", outcome.kind, outcome.key, reason),
                OutcomeStatus::Skipped { reason } => warn!("  {} '{}' skipped: {}", outcome.kind, outcome.key, reason),
                OutcomeStatus::Created { .. } | OutcomeStatus::AlreadyExists { .. } => {}
            }
        }
    }
}

impl Extend<ResourceOutcome> for ConfigurationReport {
    fn extend<I: IntoIterator<Item = ResourceOutcome>>(&mut self, iter: I) {
        self.outcomes.extend(iter);
    }
}
