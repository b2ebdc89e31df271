use serde::{Deserialize, Serialize};

/// The five sequential wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Personal,
    Contact,
    Address,
    Employment,
    Documents,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Personal,
        WizardStep::Contact,
        WizardStep::Address,
        WizardStep::Employment,
        WizardStep::Documents,
    ];

    pub const FIRST: WizardStep = WizardStep::Personal;
    pub const LAST: WizardStep = WizardStep::Documents;

    /// 1-based position, as persisted in draft metadata.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Contact => 2,
            WizardStep::Address => 3,
            WizardStep::Employment => 4,
            WizardStep::Documents => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == number)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Details",
            WizardStep::Contact => "Contact Details",
            WizardStep::Address => "Address",
            WizardStep::Employment => "Employment Details",
            WizardStep::Documents => "Document Verification",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_linear() {
        assert_eq!(WizardStep::Personal.previous(), None);
        assert_eq!(WizardStep::Personal.next(), Some(WizardStep::Contact));
        assert_eq!(WizardStep::Documents.next(), None);
        assert_eq!(WizardStep::from_number(4), Some(WizardStep::Employment));
        assert_eq!(WizardStep::from_number(0), None);
    }
}
