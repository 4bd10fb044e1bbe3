use serde::{Deserialize, Serialize};

/// One record of an import: the line as read plus its split fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub raw: String,
    pub fields: Vec<String>,
}

impl Row {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub input: String,
    pub output: String,
    pub parsed: usize,
    pub retained: usize,
}

impl ImportSummary {
    pub fn rejected(&self) -> usize {
        self.parsed - self.retained
    }
}
