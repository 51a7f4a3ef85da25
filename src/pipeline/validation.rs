//! Validation engine for summarizer specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`](super::spec::SummarySpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use rapid_summarizer::pipeline::spec::SummarySpec;
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//!
//! let spec = SummarySpec::from_json(r#"{ "v": 1, "rank": { "damping": 1.5 } }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.has_errors());
//! for err in report.errors() {
//!     eprintln!("{err}");
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::{SummarySpec, SPEC_VERSION};
use crate::errors::{Result, SummarizerError};
use crate::nlp::model::Language;
use crate::types::SummarizerConfig;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning wrapping a
/// [`SpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Turn a report with errors into [`SummarizerError::InvalidSpec`].
    ///
    /// Warnings are logged (with the `tracing` feature) and otherwise dropped.
    pub fn into_result(self) -> Result<()> {
        #[cfg(feature = "tracing")]
        for warning in self.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        if self.is_valid() {
            return Ok(());
        }
        Err(SummarizerError::InvalidSpec(
            self.errors().cloned().collect(),
        ))
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummarySpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"rank_params"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummarySpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(SegmenterRule));
        engine.add_rule(Box::new(ScoringRule));
        engine.add_rule(Box::new(GraphBoostRule));
        engine.add_rule(Box::new(RankParamsRule));
        engine.add_rule(Box::new(BlendWeightsRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }

    /// Validate a config by converting it to a spec and running the same rules.
    pub fn validate_config(&self, config: &SummarizerConfig) -> ValidationReport {
        self.validate(&SummarySpec::from(config))
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn invalid(path: &str, message: impl Into<String>) -> SpecError {
    SpecError::new(ErrorCode::InvalidValue, path, message)
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\" to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Language ────────────────────────────────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let Some(value) = &spec.language else {
            return vec![];
        };
        if Language::parse(value).is_some() {
            return vec![];
        }
        let supported: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedLanguage,
                "/language",
                format!("unsupported language \"{value}\""),
            )
            .with_hint(format!("Use one of: {}", supported.join(", "))),
        )]
    }
}

// ─── 3. Segmenter ───────────────────────────────────────────────────────────

struct SegmenterRule;

impl ValidationRule for SegmenterRule {
    fn name(&self) -> &str {
        "segmenter"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        if spec.segmenter.min_chars == Some(0) {
            vec![ValidationDiagnostic::error(
                invalid("/segmenter/min_chars", "min_chars must be greater than 0")
                    .with_hint("Very short fragments are noise; the default is 10"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 4. Token band and length penalty ───────────────────────────────────────

struct ScoringRule;

impl ValidationRule for ScoringRule {
    fn name(&self) -> &str {
        "scoring"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let cfg = spec.to_config();
        let mut out = Vec::new();

        if cfg.min_tokens > cfg.max_tokens {
            out.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/scoring/min_tokens",
                    format!(
                        "min_tokens ({}) must not exceed max_tokens ({})",
                        cfg.min_tokens, cfg.max_tokens
                    ),
                )
                .with_hint("Swap the bounds or widen the band"),
            ));
        }

        let penalty = cfg.length_penalty;
        if !(penalty.is_finite() && penalty > 0.0 && penalty <= 1.0) {
            out.push(ValidationDiagnostic::error(
                invalid(
                    "/scoring/length_penalty",
                    format!("length_penalty must be in (0, 1], got {penalty}"),
                )
                .with_hint("Use 1.0 to disable the penalty"),
            ));
        }

        out
    }
}

// ─── 5. Similarity boosts ───────────────────────────────────────────────────

struct GraphBoostRule;

impl ValidationRule for GraphBoostRule {
    fn name(&self) -> &str {
        "graph_boosts"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let cfg = spec.to_config();
        let mut out = Vec::new();

        let tf = cfg.term_frequency_boost;
        if !(tf.is_finite() && tf >= 0.0) {
            out.push(ValidationDiagnostic::error(invalid(
                "/graph/term_frequency_boost",
                format!("term_frequency_boost must be finite and non-negative, got {tf}"),
            )));
        }

        let boost = cfg.connective_boost;
        if !(boost.is_finite() && boost > 0.0) {
            out.push(ValidationDiagnostic::error(
                invalid(
                    "/graph/connective_boost",
                    format!("connective_boost must be finite and positive, got {boost}"),
                )
                .with_hint("Use 1.0 to disable the boost"),
            ));
        }

        out
    }
}

// ─── 6. PageRank parameters ─────────────────────────────────────────────────

struct RankParamsRule;

impl ValidationRule for RankParamsRule {
    fn name(&self) -> &str {
        "rank_params"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let cfg = spec.to_config();
        let mut out = Vec::new();

        if !(cfg.damping > 0.0 && cfg.damping < 1.0) {
            out.push(ValidationDiagnostic::error(
                invalid(
                    "/rank/damping",
                    format!("damping must be in (0, 1), got {}", cfg.damping),
                )
                .with_hint("The conventional value is 0.85"),
            ));
        }

        if cfg.max_iterations == 0 {
            out.push(ValidationDiagnostic::error(invalid(
                "/rank/max_iterations",
                "max_iterations must be greater than 0",
            )));
        }

        let threshold = cfg.convergence_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            out.push(ValidationDiagnostic::error(invalid(
                "/rank/convergence_threshold",
                format!("convergence_threshold must be finite and positive, got {threshold}"),
            )));
        }

        out
    }
}

// ─── 7. Blend weights ───────────────────────────────────────────────────────

struct BlendWeightsRule;

impl ValidationRule for BlendWeightsRule {
    fn name(&self) -> &str {
        "blend_weights"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let cfg = spec.to_config();
        let weights = [
            ("centrality_weight", cfg.centrality_weight),
            ("importance_weight", cfg.importance_weight),
        ];
        let mut out = Vec::new();

        for (field, value) in weights {
            if !(value.is_finite() && value >= 0.0) {
                out.push(ValidationDiagnostic::error(invalid(
                    &format!("/rank/{field}"),
                    format!("{field} must be finite and non-negative, got {value}"),
                )));
            }
        }
        if !out.is_empty() {
            return out;
        }

        let sum = cfg.centrality_weight + cfg.importance_weight;
        if sum == 0.0 {
            out.push(ValidationDiagnostic::error(
                SpecError::new(
                    ErrorCode::InvalidCombo,
                    "/rank",
                    "centrality_weight and importance_weight cannot both be 0",
                )
                .with_hint("The defaults are 0.7 and 0.3"),
            ));
        } else if (sum - 1.0).abs() > 1e-9 {
            out.push(ValidationDiagnostic::warning(SpecError::new(
                ErrorCode::InvalidCombo,
                "/rank",
                format!("blend weights sum to {sum}, not 1; blended scores are not on a unit scale"),
            )));
        }

        out
    }
}

// ─── 8. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, Option<usize>)] = &[
            ("max_sentences", spec.runtime.max_sentences),
            ("parallel_threshold", spec.runtime.parallel_threshold),
        ];

        for &(field, value) in checks {
            if value == Some(0) {
                out.push(ValidationDiagnostic::error(
                    SpecError::new(
                        ErrorCode::LimitExceeded,
                        format!("/runtime/{field}"),
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(format!("Remove {field} to use the default, or set it to a positive value")),
                ));
            }
        }

        out
    }
}

// ─── 9. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarySpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 6] = [
            ("", &spec.unknown_fields),
            ("/segmenter", &spec.segmenter.unknown_fields),
            ("/scoring", &spec.scoring.unknown_fields),
            ("/graph", &spec.graph.unknown_fields),
            ("/rank", &spec.rank.unknown_fields),
            ("/runtime", &spec.runtime.unknown_fields),
        ];
        sections
            .into_iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
