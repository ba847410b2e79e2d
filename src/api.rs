use crate::engine::{self, CompiledRules, FieldTrace};
use crate::error::{Error, Result};
use crate::{DoorSpecification, Rule};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::get);
static COMPILED_RULES: Lazy<CompiledRules<'static>> = Lazy::new(|| CompiledRules::new(&DEFAULT_RULES));

/// Where the text came from. Controls the mode-specific rules: occurrence
/// order for heights, the device panel keyword set and RotoTract gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A single uploaded document; earlier statements win.
    #[default]
    Document,
    /// An accumulated chat transcript; later statements win.
    Conversation,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Document => "document",
            Mode::Conversation => "conversation",
        })
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" | "doc" => Ok(Mode::Document),
            "conversation" | "chat" => Ok(Mode::Conversation),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// What happens to fields nothing resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Leave them unknown.
    #[default]
    Strict,
    /// Substitute the canonical defaults.
    Lenient,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Strict => "strict",
            Policy::Lenient => "lenient",
        })
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Policy::Strict),
            "lenient" => Ok(Policy::Lenient),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Options that select the extraction mode and completion policy.
///
/// The two usual pairings have constructors; any combination is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: Mode,
    pub policy: Policy,
}

impl Options {
    /// Single-document extraction: document rules, strict completion.
    pub fn document() -> Self {
        Options { mode: Mode::Document, policy: Policy::Strict }
    }

    /// Chat summary extraction: conversation rules, lenient completion.
    pub fn conversation() -> Self {
        Options { mode: Mode::Conversation, policy: Policy::Lenient }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Turn { role, content: content.into() }
    }
}

/// An ordered chat transcript, as kept by the conversation front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    pub turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(turns: Vec<Turn>) -> Self {
        Transcript { turns }
    }

    /// Parse a JSON array of `{ "role": ..., "content": ... }` objects.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn::new(role, content));
    }

    /// Turn contents that make up the corpus: everything after the leading
    /// run of system (instruction) turns, in order.
    pub fn corpus_sources(&self) -> impl Iterator<Item = &str> {
        self.turns.iter().skip_while(|t| t.role == Role::System).map(|t| t.content.as_str())
    }
}

/// Result of [`extract_with`].
#[derive(Debug, Clone)]
pub struct Extraction {
    pub spec: DoorSpecification,
    pub options: Options,
    /// Total elapsed time spent extracting.
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StageTimings {
    pub total: Duration,
    /// Time spent running field rules over the corpus.
    pub matching: Duration,
    /// Derivation, completion and assembly.
    pub resolve: Duration,
}

/// Additional details returned by [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionDetails {
    /// Length in bytes of the normalized corpus.
    pub corpus_len: usize,
    /// Names of rules that were eligible for this corpus and mode.
    pub active_rules: Vec<String>,
    /// Per-field value and provenance, in schema order.
    pub fields: Vec<FieldTrace>,
    pub timings: StageTimings,
}

/// Result of [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionVerbose {
    pub spec: DoorSpecification,
    pub options: Options,
    pub elapsed: Duration,
    pub details: ExtractionDetails,
}

/// Extract a specification from a single document (document mode, strict).
///
/// # Example
/// ```
/// use doorspec::{DoorType, TriState, extract_document};
///
/// let spec = extract_document("Door type: Freedom Plus FlashGard, 72 inches tall");
/// assert_eq!(spec.door_type, TriState::Known(DoorType::FreedomPlusFlashGard));
/// assert_eq!(spec.door_thickness_gauge, TriState::Known(12));
/// ```
pub fn extract_document(text: &str) -> DoorSpecification {
    extract_with([text], &Options::document()).spec
}

/// Extract a specification from a chat transcript (conversation mode,
/// lenient). The leading system turns are not searched.
pub fn extract_conversation(transcript: &Transcript) -> DoorSpecification {
    extract_with(transcript.corpus_sources(), &Options::conversation()).spec
}

/// Extract a specification from `sources` with explicit options.
///
/// Sources are normalized into one corpus (lowercased, joined by a space).
pub fn extract_with<I, S>(sources: I, options: &Options) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let corpus = engine::normalize(sources);
    let run = engine::Extractor::new(&corpus, &COMPILED_RULES, options).run_with_metrics();

    Extraction { spec: run.spec, options: *options, elapsed: run.metrics.total }
}

/// Like [`extract_with`], but also returns per-field provenance, the active
/// rules and stage timings.
pub fn extract_verbose_with<I, S>(sources: I, options: &Options) -> ExtractionVerbose
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let corpus = engine::normalize(sources);
    let run = engine::Extractor::new(&corpus, &COMPILED_RULES, options).run_with_metrics();

    let details = ExtractionDetails {
        corpus_len: corpus.len(),
        active_rules: run.active_rules.iter().map(|s| s.to_string()).collect(),
        fields: run.traces,
        timings: StageTimings {
            total: run.metrics.total,
            matching: run.metrics.matching,
            resolve: run.metrics.resolve,
        },
    };

    ExtractionVerbose { spec: run.spec, options: *options, elapsed: run.metrics.total, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Provenance, TriState};

    #[test]
    fn mode_and_policy_parse_from_str() {
        assert_eq!("Document".parse::<Mode>().unwrap(), Mode::Document);
        assert_eq!(" chat ".parse::<Mode>().unwrap(), Mode::Conversation);
        assert_eq!("lenient".parse::<Policy>().unwrap(), Policy::Lenient);
        assert!(matches!("loose".parse::<Policy>(), Err(Error::UnknownPolicy(_))));
        assert!(matches!("email".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn transcript_skips_leading_system_turns_only() {
        let raw = r#"[
            {"role": "system", "content": "You are an MCC door design expert."},
            {"role": "user", "content": "Freedom Plus please"},
            {"role": "system", "content": "Document context"},
            {"role": "assistant", "content": "Noted."}
        ]"#;
        let transcript = Transcript::from_json(raw).unwrap();
        let sources: Vec<&str> = transcript.corpus_sources().collect();
        assert_eq!(sources, vec!["Freedom Plus please", "Document context", "Noted."]);
    }

    #[test]
    fn transcript_rejects_unknown_roles() {
        let err = Transcript::from_json(r#"[{"role": "tool", "content": "x"}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTranscript(_)));
    }

    #[test]
    fn extract_with_reports_options() {
        let res = extract_with(["freedom plus"], &Options::conversation());
        assert_eq!(res.options, Options::conversation());
        assert_eq!(res.spec.door_type, TriState::Known(crate::DoorType::FreedomPlus));
        assert!(res.elapsed >= Duration::ZERO);
    }

    #[test]
    fn extract_verbose_includes_traces_and_rules() {
        let res = extract_verbose_with(["Door height: 40 inches"], &Options::document());
        assert_eq!(res.details.corpus_len, "door height: 40 inches".len());
        assert!(!res.details.active_rules.is_empty());
        assert!(res.details.timings.matching <= res.details.timings.total);

        let height = &res.details.fields[Field::DoorHeight.index()];
        assert_eq!(height.value, "40");
        assert!(matches!(height.provenance, Provenance::Matched { .. }));
        assert_eq!(res.details.fields[Field::DoorType.index()].provenance, Provenance::Unknown);
    }
}
