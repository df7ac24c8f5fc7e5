//! Default policy for fields that could not be detected.
//!
//! Every field except the educational level degrades to a fixed sentinel
//! instead of failing. The sentinels live here, in one place, so extractors
//! never carry default literals inline.

use std::fmt;

/// A field with a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldDefault {
    /// Academic year
    Year,
    /// Seven-digit modular code
    ModularCode,
    /// Administrative annex (never derived)
    Annex,
    /// Numeric grade
    Grade,
    /// Section letter
    Section,
    /// Institution name
    Institution,
}

impl FieldDefault {
    /// All fields with a default, in extraction order.
    pub const ALL: [FieldDefault; 6] = [
        FieldDefault::Year,
        FieldDefault::ModularCode,
        FieldDefault::Annex,
        FieldDefault::Grade,
        FieldDefault::Section,
        FieldDefault::Institution,
    ];

    /// The sentinel value used when the field is not found.
    pub const fn value(self) -> &'static str {
        match self {
            FieldDefault::Year => "2024",
            FieldDefault::ModularCode => "0000000",
            FieldDefault::Annex => "0",
            FieldDefault::Grade => "1",
            FieldDefault::Section => "A",
            FieldDefault::Institution => "IE DESCONOCIDA",
        }
    }

    /// Field name for logs.
    pub const fn field_name(self) -> &'static str {
        match self {
            FieldDefault::Year => "year",
            FieldDefault::ModularCode => "modular code",
            FieldDefault::Annex => "annex",
            FieldDefault::Grade => "grade",
            FieldDefault::Section => "section",
            FieldDefault::Institution => "institution",
        }
    }

    /// Return `found` if present, otherwise this field's default.
    pub fn or_default(self, found: Option<String>) -> String {
        match found {
            Some(value) => value,
            None => {
                log::debug!("{} not detected, using default '{}'", self.field_name(), self.value());
                self.value().to_string()
            },
        }
    }
}

impl fmt::Display for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
