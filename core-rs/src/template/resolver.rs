/**
 * resolver.rs
 * Placeholder substitution over tokenized query templates
 */

use super::tokenizer::{tokenize, Segment};

/// The substitution target of a `precision` tag: the literal word as it
/// appears in the template body, replaced by the scale factor.
pub const PRECISION_WORD: &str = "precision";

/// The seven recognized placeholder roles.
///
/// Anything else in role position is a reserved tag and resolves to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamRole {
    Dropdown1,
    Dropdown2,
    Dropdown3,
    Dropdown4,
    StartDate,
    EndDate,
    Precision,
}

impl ParamRole {
    /// Parse a trimmed role name. Case- and whitespace-sensitive.
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "dropdown1" => Some(Self::Dropdown1),
            "dropdown2" => Some(Self::Dropdown2),
            "dropdown3" => Some(Self::Dropdown3),
            "dropdown4" => Some(Self::Dropdown4),
            "start_date" => Some(Self::StartDate),
            "end_date" => Some(Self::EndDate),
            "precision" => Some(Self::Precision),
            _ => None,
        }
    }
}

/// User-supplied parameter values for one query submission.
///
/// Every field is optional; an absent dropdown or date substitutes as the
/// empty string, an absent precision leaves the `precision` word alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    pub dropdown1: Option<String>,
    pub dropdown2: Option<String>,
    pub dropdown3: Option<String>,
    pub dropdown4: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub precision: Option<i32>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dropdown1(mut self, value: impl Into<String>) -> Self {
        self.dropdown1 = Some(value.into());
        self
    }

    pub fn with_dropdown2(mut self, value: impl Into<String>) -> Self {
        self.dropdown2 = Some(value.into());
        self
    }

    pub fn with_dropdown3(mut self, value: impl Into<String>) -> Self {
        self.dropdown3 = Some(value.into());
        self
    }

    pub fn with_dropdown4(mut self, value: impl Into<String>) -> Self {
        self.dropdown4 = Some(value.into());
        self
    }

    pub fn with_start_date(mut self, value: impl Into<String>) -> Self {
        self.start_date = Some(value.into());
        self
    }

    pub fn with_end_date(mut self, value: impl Into<String>) -> Self {
        self.end_date = Some(value.into());
        self
    }

    pub fn with_precision(mut self, decimals: i32) -> Self {
        self.precision = Some(decimals);
        self
    }

    fn value_for(&self, role: ParamRole) -> &str {
        let slot = match role {
            ParamRole::Dropdown1 => &self.dropdown1,
            ParamRole::Dropdown2 => &self.dropdown2,
            ParamRole::Dropdown3 => &self.dropdown3,
            ParamRole::Dropdown4 => &self.dropdown4,
            ParamRole::StartDate => &self.start_date,
            ParamRole::EndDate => &self.end_date,
            ParamRole::Precision => &None,
        };
        slot.as_deref().unwrap_or_default()
    }
}

/// Format `10^decimals` the way the precision substitution expects it:
/// `2 -> "100.0"`, `0 -> "1.0"`, negative exponents as plain decimals.
pub fn scale_factor(decimals: i32) -> String {
    if decimals >= 0 {
        format!("{}.0", 10u64.pow(decimals.min(18) as u32))
    } else {
        format!("{}", 10f64.powi(decimals))
    }
}

/// Resolve a query template against a set of bindings.
///
/// The template is tokenized once; the output is rebuilt segment by segment:
/// - a recognized dropdown or date tag emits its binding value in place,
/// - a recognized `precision` tag emits nothing, and activates replacement
///   of the literal word `precision` inside every literal span,
/// - an unrecognized tag is emitted verbatim,
/// - the tail after an unmatched `<<` is emitted verbatim, untouched by any
///   substitution (resolution of the output is a no-op for that tail).
///
/// Never fails: malformed markers degrade to truncation, unknown roles are
/// no-ops. Use [`super::tokenizer::check_markers`] for the strict check.
pub fn resolve(template: &str, bindings: &Bindings) -> String {
    let segments = tokenize(template);

    // A precision tag anywhere in the template activates word substitution
    // across all literal spans, in template order or not.
    let precision_factor = segments.iter().find_map(|segment| match segment {
        Segment::Tag { role, .. } if ParamRole::parse(role) == Some(ParamRole::Precision) => {
            bindings.precision.map(scale_factor)
        }
        _ => None,
    });

    let mut out = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => match &precision_factor {
                Some(factor) => out.push_str(&text.replace(PRECISION_WORD, factor)),
                None => out.push_str(text),
            },
            Segment::Tag { raw, role, .. } => match ParamRole::parse(role) {
                Some(ParamRole::Precision) => {} // consumed; handled via the word rule
                Some(role) => out.push_str(bindings.value_for(role)),
                None => out.push_str(raw),
            },
            Segment::Tail(tail) => out.push_str(tail),
        }
    }
    out
}
