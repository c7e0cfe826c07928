#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use std::fmt;

use strum_macros::Display;

use super::PowerOfTwo;

/// Rendering hint attached to every piece of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Caution,
    Label,
    AlertLabel,
    Value,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Field {
        label: &'static str,
        label_tone: Tone,
        value: String,
    },
    Text {
        text: String,
        tone: Tone,
    },
    Blank,
}

impl ReportLine {
    fn field(label: &'static str, value: impl ToString) -> ReportLine {
        ReportLine::Field {
            label,
            label_tone: Tone::Label,
            value: value.to_string(),
        }
    }

    fn alert_field(label: &'static str, value: impl ToString) -> ReportLine {
        ReportLine::Field {
            label,
            label_tone: Tone::AlertLabel,
            value: value.to_string(),
        }
    }

    fn text(tone: Tone, text: impl ToString) -> ReportLine {
        ReportLine::Text {
            text: text.to_string(),
            tone,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Field { label, value, .. } => write!(f, "{label}: {value}"),
            ReportLine::Text { text, .. } => write!(f, "{text}"),
            ReportLine::Blank => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ReportStatus {
    AwaitingInput,
    Exact,
    BoundedUnproven,
    NoData,
    Asymptotic,
    Invalid,
}

/// Everything the renderer needs to show the outcome of one query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Report {
    #[default]
    Idle,
    Exact {
        dimension: u64,
        value: u64,
        root_system: String,
        diagram: Option<String>,
    },
    Bounded {
        dimension: u64,
        lower: u64,
        upper: u64,
    },
    NoData {
        dimension: u64,
    },
    Asymptotic {
        dimension: u64,
        lower: PowerOfTwo,
        upper: PowerOfTwo,
    },
    Invalid,
}

impl Report {
    pub fn status(&self) -> ReportStatus {
        match self {
            Report::Idle => ReportStatus::AwaitingInput,
            Report::Exact { .. } => ReportStatus::Exact,
            Report::Bounded { .. } => ReportStatus::BoundedUnproven,
            Report::NoData { .. } => ReportStatus::NoData,
            Report::Asymptotic { .. } => ReportStatus::Asymptotic,
            Report::Invalid => ReportStatus::Invalid,
        }
    }

    pub fn dimension(&self) -> Option<u64> {
        match self {
            Report::Exact { dimension, .. }
            | Report::Bounded { dimension, .. }
            | Report::NoData { dimension }
            | Report::Asymptotic { dimension, .. } => Some(*dimension),
            Report::Idle | Report::Invalid => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status() == ReportStatus::Invalid
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        match self {
            Report::Idle => vec![ReportLine::text(
                Tone::Caution,
                "Enter a dimension and press Enter.",
            )],
            Report::Exact {
                dimension,
                value,
                root_system,
                diagram,
            } => {
                let mut lines = vec![
                    ReportLine::field("Dimension", dimension),
                    ReportLine::field("Exact Kissing Number", value),
                    ReportLine::field("Root System", root_system),
                    ReportLine::Blank,
                    ReportLine::text(Tone::Label, "Coxeter Diagram:"),
                ];
                if let Some(diagram) = diagram {
                    lines.extend(diagram.lines().map(|e| ReportLine::text(Tone::Value, e)));
                }
                lines
            }
            Report::Bounded {
                dimension,
                lower,
                upper,
            } => vec![
                ReportLine::text(Tone::Caution, format!("Dimension {dimension} (Unproven)")),
                ReportLine::Blank,
                ReportLine::field("Lower Bound", lower),
                ReportLine::alert_field("Upper Bound", upper),
                ReportLine::Blank,
                ReportLine::text(Tone::Caution, "Exact kissing number not known."),
            ],
            Report::NoData { dimension } => vec![
                ReportLine::text(Tone::Caution, format!("Dimension {dimension}")),
                ReportLine::text(Tone::Caution, "No finite bounds stored."),
            ],
            Report::Asymptotic {
                dimension,
                lower,
                upper,
            } => vec![
                ReportLine::text(Tone::Accent, "Asymptotic Bounds (Kabatiansky–Levenshtein)"),
                ReportLine::Blank,
                ReportLine::field("Dimension", dimension),
                ReportLine::field("Lower Bound", lower),
                ReportLine::alert_field("Upper Bound", upper),
                ReportLine::Blank,
                ReportLine::text(
                    Tone::Caution,
                    "These bounds hold for sufficiently large dimensions.",
                ),
            ],
            Report::Invalid => vec![ReportLine::text(Tone::Error, "Invalid dimension")],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .lines()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<String>>()
            .join("\n");

        write!(f, "{text}")
    }
}
