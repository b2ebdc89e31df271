use serde::{Deserialize, Serialize};

use crate::officer::enums::DocumentType;

/// One row of the verification checklist. Verification is a claim made by
/// the operator; no file is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub is_selected: bool,
}

/// Fixed-size checklist with exactly one record per [`DocumentType`], in
/// declaration order.
///
/// Deserialisation rebuilds the full list, so a stored list with missing or
/// duplicated rows still comes back in canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DocumentRecord>", into = "Vec<DocumentRecord>")]
pub struct DocumentVerification {
    records: Vec<DocumentRecord>,
}

impl Default for DocumentVerification {
    fn default() -> Self {
        Self {
            records: DocumentType::ALL
                .iter()
                .map(|t| DocumentRecord {
                    document_type: *t,
                    is_selected: false,
                })
                .collect(),
        }
    }
}

impl From<Vec<DocumentRecord>> for DocumentVerification {
    fn from(stored: Vec<DocumentRecord>) -> Self {
        let mut verification = Self::default();
        for record in stored {
            verification.set_selected(record.document_type, record.is_selected);
        }
        verification
    }
}

impl From<DocumentVerification> for Vec<DocumentRecord> {
    fn from(verification: DocumentVerification) -> Self {
        verification.records
    }
}

impl DocumentVerification {
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn set_selected(&mut self, document_type: DocumentType, selected: bool) {
        if let Some(record) = self
            .records
            .iter_mut()
            .find(|r| r.document_type == document_type)
        {
            record.is_selected = selected;
        }
    }

    pub fn is_selected(&self, document_type: DocumentType) -> bool {
        self.records
            .iter()
            .any(|r| r.document_type == document_type && r.is_selected)
    }

    pub fn selected(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.records
            .iter()
            .filter(|r| r.is_selected)
            .map(|r| r.document_type)
    }

    pub fn is_populated(&self) -> bool {
        self.records.iter().any(|r| r.is_selected)
    }
}

/// The set of document types that must all be selected before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPolicy {
    mandatory: Vec<DocumentType>,
}

impl Default for DocumentPolicy {
    fn default() -> Self {
        Self::new(vec![
            DocumentType::AadhaarCard,
            DocumentType::PanCard,
            DocumentType::PoliceVerification,
        ])
    }
}

impl DocumentPolicy {
    pub fn new(mut mandatory: Vec<DocumentType>) -> Self {
        mandatory.sort_by_key(|t| DocumentType::ALL.iter().position(|a| a == t));
        mandatory.dedup();
        Self { mandatory }
    }

    pub fn mandatory(&self) -> &[DocumentType] {
        &self.mandatory
    }

    /// Mandatory types not yet selected, in checklist order.
    pub fn missing(&self, verification: &DocumentVerification) -> Vec<DocumentType> {
        self.mandatory
            .iter()
            .copied()
            .filter(|t| !verification.is_selected(*t))
            .collect()
    }

    pub fn is_satisfied(&self, verification: &DocumentVerification) -> bool {
        let selected_mandatory = self
            .mandatory
            .iter()
            .filter(|t| verification.is_selected(**t))
            .count();
        selected_mandatory >= self.mandatory.len()
    }
}
