//! Types crossing the prompter/transport boundary. The core never talks to a
//! chat channel directly; it hands these to whatever frontend hosts the
//! conversation.

use serde::{Deserialize, Serialize};

/// One selectable answer for a constrained question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Machine-readable value, fed back verbatim as the raw answer.
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

/// A field question with its computed answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPrompt {
    pub field_id: String,
    pub text: String,
    pub options: Vec<ChoiceOption>,
    /// Whether repeated answers accumulate for this field.
    #[serde(default)]
    pub allow_multiple: bool,
}

/// One candidate in the final pick-one-of-many resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    /// Stable surrogate identifier, unique among the presented candidates.
    pub id: String,
    pub label: String,
    pub summary: String,
}
