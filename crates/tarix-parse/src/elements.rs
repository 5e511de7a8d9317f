use serde::{Deserialize, Serialize};

/// Date entities extracted from a converted token sequence. Sparse: any
/// slot may be absent when the input gave no usable or non-contradictory
/// evidence for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntities {
    /// Four-digit year as a string (two-digit years arrive here with the
    /// century prefix already applied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Canonical month spelling from the month list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Day of month as a string, 1–31. Not validated against the month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

impl DateEntities {
    /// `YEAR:MONTH:DAY` when all three slots are filled.
    pub fn format(&self) -> Option<String> {
        match (&self.year, &self.month, &self.day) {
            (Some(y), Some(m), Some(d)) => Some(format!("{y}:{m}:{d}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_requires_all_slots() {
        let mut entities = DateEntities {
            year: Some("1992".into()),
            month: Some("iyun".into()),
            day: None,
        };
        assert_eq!(entities.format(), None);

        entities.day = Some("17".into());
        assert_eq!(entities.format().as_deref(), Some("1992:iyun:17"));
    }

    #[test]
    fn sparse_serialization() {
        let entities = DateEntities {
            year: Some("1998".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&entities).unwrap();
        assert_eq!(json, r#"{"year":"1998"}"#);
    }
}
