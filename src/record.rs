// src/record.rs
//
// Data model for the directory datasets. Records are deserialized once at
// load and never mutated; the pipeline only filters and derives from them.
//
// Two dataset variants exist:
// - direct:  the record itself is an employer listing (Industries, Date
//            Posted) with `EmployerName` + `EmployerLink`;
// - nested:  the record is a region bucket carrying an ordered `Employers`
//            list (Regions), each entry with contact + careers links.
// Facet fields (State, City_Town_Other, Scale, Type, Industry,
// Subindustry, DatePosted) are free-form strings and differ per variant,
// so they are captured in a flattened map rather than typed per-domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A sub-record inside a region bucket.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Employer {
    #[serde(rename = "EmployerName")]
    pub name: String,
    #[serde(rename = "EmployerContact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "EmployerCareers", default, skip_serializing_if = "Option::is_none")]
    pub careers: Option<String>,
}

/// One row of a loaded dataset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "EmployerName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "EmployerLink", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "EmployerContact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "EmployerCareers", default, skip_serializing_if = "Option::is_none")]
    pub careers: Option<String>,

    /// Nested employer list (regions variant only).
    #[serde(rename = "Employers", default, skip_serializing_if = "Vec::is_empty")]
    pub employers: Vec<Employer>,

    /// All remaining fields: the facet columns.
    #[serde(flatten)]
    pub facets: BTreeMap<String, String>,
}

impl Record {
    /// Facet lookup. A missing field never matches any selection value.
    pub fn facet(&self, field: &str) -> Option<&str> {
        self.facets.get(field).map(|v| v.as_str())
    }

    /// Identifying name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn direct_variant_roundtrip() {
        let json = r#"{
            "Industry": "Tech",
            "Subindustry": "Software",
            "Scale": "Large",
            "Type": "Remote",
            "EmployerName": "Acme",
            "EmployerLink": "acme.example/jobs"
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.name(), Some("Acme"));
        assert_eq!(r.facet("Industry"), Some("Tech"));
        assert_eq!(r.facet("Subindustry"), Some("Software"));
        assert_eq!(r.link.as_deref(), Some("acme.example/jobs"));
        assert!(r.employers.is_empty());
        assert_eq!(r.facet("City_Town_Other"), None);
    }

    #[test]
    fn nested_variant_parses_employers() {
        let json = r#"{
            "State": "CA",
            "City_Town_Other": "SF",
            "Scale": "Large",
            "Type": "Retail",
            "Employers": [
                { "EmployerName": "Acme", "EmployerContact": "acme.example" },
                { "EmployerName": "Zed", "EmployerCareers": "zed.example/careers" }
            ]
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.name(), None);
        assert_eq!(r.employers.len(), 2);
        assert_eq!(r.employers[0].name, "Acme");
        assert_eq!(r.employers[1].careers.as_deref(), Some("zed.example/careers"));
    }

    #[test]
    fn empty_name_counts_as_absent() {
        let json = r#"{ "EmployerName": "", "Scale": "Small" }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.name(), None);
    }
}
