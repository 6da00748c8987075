use serde::{Deserialize, Serialize};

/// Shown in rendered clue text when a hint has no person attached.
pub const UNKNOWN_PERSON: &str = "Onbekend";

/// One rule for one character position of the activation key.
///
/// The `type` tag in the YAML selects the variant; a hint with an unknown
/// tag or a missing required field fails at config load, never later.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Hint {
    Direct {
        /// 1-based position into the activation key.
        character: usize,
        #[serde(default)]
        person: String,
        /// Additive shift, any sign; reduced mod 36 when applied.
        shift: i32,
        requirement: String,
        /// Pre-rendered clue text slot. Filled for synthesized hints; the
        /// resolver always re-renders from the configured template.
        #[serde(default)]
        hint_text: String,
    },
    Relative {
        character: usize,
        #[serde(default)]
        person: String,
        /// 1-based index into the completed hint list (processing order,
        /// not character position). Must point at an earlier hint.
        reference_hint: usize,
        extra_shift: i32,
        requirement: String,
    },
}

impl Hint {
    pub fn character(&self) -> usize {
        match self {
            Hint::Direct { character, .. } | Hint::Relative { character, .. } => *character,
        }
    }

    pub fn person(&self) -> &str {
        match self {
            Hint::Direct { person, .. } | Hint::Relative { person, .. } => person,
        }
    }

    pub fn requirement(&self) -> &str {
        match self {
            Hint::Direct { requirement, .. } | Hint::Relative { requirement, .. } => requirement,
        }
    }
}

/// Clue text templates, supplied by the config file.
///
/// Placeholders use `{name}` syntax: `direct` accepts `{person}`, `{index}`,
/// `{shift}` and `{encrypted_char}`; the relative variants accept `{person}`,
/// `{index}`, `{extra_shift}` (absolute value) and `{reference_person}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Templates {
    pub direct: String,
    pub relative_more: String,
    pub relative_less: String,
}

/// Root of the YAML config document.
#[derive(Debug, Deserialize)]
pub struct HintConfig {
    pub hints: Vec<Hint>,
    pub templates: Templates,
}

/// One row of the clue sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintRecord {
    pub person: String,
    pub hint_text: String,
    pub requirement: String,
    pub encrypted_char: char,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// `--json` payload for an encrypt run.
#[derive(Debug, Serialize)]
pub struct EncryptReport {
    pub encrypted_key: String,
    pub clue_sheet: String,
    pub hints: Vec<HintRecord>,
}
