use serde::{Deserialize, Serialize};

use crate::officer::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub landmark: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        *self == Address::default()
    }
}

/// Local and permanent address with the "same as permanent" switch.
///
/// While `same_as_permanent` is set the local address is authoritative and the
/// permanent address is a read-only mirror of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDetails {
    local: Address,
    permanent: Address,
    same_as_permanent: bool,
}

impl AddressDetails {
    pub fn local(&self) -> &Address {
        &self.local
    }

    pub fn permanent(&self) -> &Address {
        &self.permanent
    }

    pub fn same_as_permanent(&self) -> bool {
        self.same_as_permanent
    }

    pub fn update_local(&mut self, f: impl FnOnce(&mut Address)) {
        f(&mut self.local);
        self.mirror();
    }

    pub fn update_permanent(&mut self, f: impl FnOnce(&mut Address)) -> Result<(), FormError> {
        if self.same_as_permanent {
            return Err(FormError::ReadOnlyField("address.permanent"));
        }
        f(&mut self.permanent);
        Ok(())
    }

    /// Turning the switch on copies local onto permanent; turning it off
    /// leaves the copied values in place for further editing.
    pub fn set_same_as_permanent(&mut self, same: bool) {
        self.same_as_permanent = same;
        self.mirror();
    }

    /// Re-establishes the mirror after the value was loaded from elsewhere.
    pub fn normalize(&mut self) {
        self.mirror();
    }

    pub fn is_populated(&self) -> bool {
        !self.local.is_empty() || !self.permanent.is_empty() || self.same_as_permanent
    }

    fn mirror(&mut self) {
        if self.same_as_permanent {
            self.permanent = self.local.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_local() -> Address {
        Address {
            line1: "12 MG Road".into(),
            city: "Pune".into(),
            district: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn local_edits_are_mirrored_while_switch_is_on() {
        let mut details = AddressDetails::default();
        details.update_local(|a| *a = sample_local());
        details.set_same_as_permanent(true);
        assert_eq!(details.permanent(), details.local());

        details.update_local(|a| a.city = "Nashik".into());
        assert_eq!(details.permanent().city, "Nashik");

        details.update_local(|a| a.pincode = "422001".into());
        assert_eq!(details.permanent(), details.local());
    }

    #[test]
    fn permanent_is_read_only_while_switch_is_on() {
        let mut details = AddressDetails::default();
        details.set_same_as_permanent(true);
        let result = details.update_permanent(|a| a.city = "Elsewhere".into());
        assert!(matches!(result, Err(FormError::ReadOnlyField(_))));
        assert_eq!(details.permanent().city, "");
    }

    #[test]
    fn switching_off_keeps_copy_and_allows_edits() {
        let mut details = AddressDetails::default();
        details.update_local(|a| *a = sample_local());
        details.set_same_as_permanent(true);
        details.set_same_as_permanent(false);

        details
            .update_permanent(|a| a.city = "Mumbai".into())
            .expect("editable after switching off");
        assert_eq!(details.permanent().city, "Mumbai");
        assert_eq!(details.local().city, "Pune");
    }
}
