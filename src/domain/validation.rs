use serde::Serialize;

/// Outcome of checking a single required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Filled,
    Empty,
}

/// Aggregate result of one submit-time validation pass, also serialized
/// as log metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub empty: usize,
}

impl ValidationReport {
    pub fn record(&mut self, status: FieldStatus) {
        self.checked += 1;
        if status == FieldStatus::Empty {
            self.empty += 1;
        }
    }

    /// A form with no required fields is valid
    pub fn is_valid(&self) -> bool {
        self.empty == 0
    }
}

/// Domain service deciding whether a required field counts as filled
pub struct RequiredFieldPolicy;

impl Default for RequiredFieldPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RequiredFieldPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whitespace-only values count as empty
    pub fn field_status(&self, raw_value: &str) -> FieldStatus {
        if raw_value.trim().is_empty() {
            FieldStatus::Empty
        } else {
            FieldStatus::Filled
        }
    }

    pub fn evaluate<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> ValidationReport {
        let mut report = ValidationReport::default();
        for value in values {
            report.record(self.field_status(value));
        }
        report
    }
}
