//! Scan result types and the severity reduction.
//!
//! [`AxeResults`] mirrors the subset of axe-core's JSON output the platform
//! consumes: the three finding lists and, per finding, the rule id, impact,
//! and affected nodes. [`PageScan`] pairs a result with the URL it came
//! from and knows how to reduce violations into [`SeverityCounts`].

use serde::{Deserialize, Serialize};

/// Severity of a violation, from the axe `impact` field.
///
/// Axe reports `critical`, `serious`, `moderate`, or `minor`. Anything
/// else (including an absent impact) is bucketed as `unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Serious,
    Moderate,
    Minor,
    Unknown,
}

impl Severity {
    /// The four severities axe actually assigns, in reporting order.
    pub const KNOWN: [Severity; 4] = [
        Severity::Critical,
        Severity::Serious,
        Severity::Moderate,
        Severity::Minor,
    ];

    pub fn from_impact(impact: Option<&str>) -> Self {
        match impact {
            Some("critical") => Severity::Critical,
            Some("serious") => Severity::Serious,
            Some("moderate") => Severity::Moderate,
            Some("minor") => Severity::Minor,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Serious => "serious",
            Severity::Moderate => "moderate",
            Severity::Minor => "minor",
            Severity::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One axe rule result (a violation, pass, or incomplete check).
///
/// Nodes are kept opaque -- only their count matters to the platform.
/// Unknown fields in the axe output are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct AxeFinding {
    /// Axe rule id, e.g. `color-contrast`.
    pub id: String,
    /// Impact as reported by axe. Absent on passes and some incompletes.
    #[serde(default)]
    pub impact: Option<String>,
    /// DOM nodes the rule matched.
    #[serde(default)]
    pub nodes: Vec<serde_json::Value>,
}

impl AxeFinding {
    pub fn severity(&self) -> Severity {
        Severity::from_impact(self.impact.as_deref())
    }

    pub fn node_count(&self) -> u64 {
        self.nodes.len() as u64
    }
}

/// The axe-core scan output for a single page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AxeResults {
    #[serde(default)]
    pub violations: Vec<AxeFinding>,
    #[serde(default)]
    pub passes: Vec<AxeFinding>,
    #[serde(default)]
    pub incomplete: Vec<AxeFinding>,
}

/// A completed scan of one URL.
#[derive(Debug, Clone)]
pub struct PageScan {
    pub url: String,
    pub results: AxeResults,
}

impl PageScan {
    /// Reduce violations into node-weighted severity counts.
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for violation in &self.results.violations {
            counts.record(violation.severity(), violation.node_count());
        }
        counts
    }
}

/// Node-weighted violation counts per severity.
///
/// The four known severities are always reported, zero or not, so the
/// resulting metric series stay dense. The `unknown` bucket is reported
/// only once a violation without a recognised impact has been recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    critical: u64,
    serious: u64,
    moderate: u64,
    minor: u64,
    unknown: u64,
    unknown_seen: bool,
}

impl SeverityCounts {
    /// Add `nodes` occurrences of `severity`.
    pub fn record(&mut self, severity: Severity, nodes: u64) {
        match severity {
            Severity::Critical => self.critical += nodes,
            Severity::Serious => self.serious += nodes,
            Severity::Moderate => self.moderate += nodes,
            Severity::Minor => self.minor += nodes,
            Severity::Unknown => {
                self.unknown += nodes;
                self.unknown_seen = true;
            }
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Serious => self.serious,
            Severity::Moderate => self.moderate,
            Severity::Minor => self.minor,
            Severity::Unknown => self.unknown,
        }
    }

    /// Total violation nodes across all severities.
    pub fn total(&self) -> u64 {
        self.critical + self.serious + self.moderate + self.minor + self.unknown
    }

    /// Iterate buckets in canonical order: critical, serious, moderate,
    /// minor, then `unknown` if any unknown-impact violation was seen.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, u64)> + '_ {
        Severity::KNOWN
            .iter()
            .map(|&s| (s, self.get(s)))
            .chain(
                self.unknown_seen
                    .then_some((Severity::Unknown, self.unknown)),
            )
    }
}
