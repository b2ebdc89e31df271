//! Enumerated form values.
//!
//! Each value carries two spellings: the label shown in (and persisted by) the
//! form, and the token the backend expects on submission.

use serde::{Deserialize, Serialize};

macro_rules! form_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($label:literal, $token:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn backend_token(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }

            pub fn from_token(token: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.backend_token() == token)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

form_enum! {
    Gender {
        Male => ("Male", "MALE"),
        Female => ("Female", "FEMALE"),
        Other => ("Other", "OTHER"),
    }
}

form_enum! {
    MaritalStatus {
        Single => ("Single", "SINGLE"),
        Married => ("Married", "MARRIED"),
        Divorced => ("Divorced", "DIVORCED"),
        Widowed => ("Widowed", "WIDOWED"),
    }
}

form_enum! {
    BloodGroup {
        APositive => ("A+", "A_POSITIVE"),
        ANegative => ("A-", "A_NEGATIVE"),
        BPositive => ("B+", "B_POSITIVE"),
        BNegative => ("B-", "B_NEGATIVE"),
        AbPositive => ("AB+", "AB_POSITIVE"),
        AbNegative => ("AB-", "AB_NEGATIVE"),
        OPositive => ("O+", "O_POSITIVE"),
        ONegative => ("O-", "O_NEGATIVE"),
    }
}

form_enum! {
    /// Relationship of an emergency contact to the officer.
    Relationship {
        Father => ("Father", "FATHER"),
        Mother => ("Mother", "MOTHER"),
        Spouse => ("Spouse", "SPOUSE"),
        Brother => ("Brother", "BROTHER"),
        Sister => ("Sister", "SISTER"),
        Son => ("Son", "SON"),
        Daughter => ("Daughter", "DAUGHTER"),
        Friend => ("Friend", "FRIEND"),
        Other => ("Other", "OTHER"),
    }
}

form_enum! {
    Designation {
        SecurityGuard => ("Security Guard", "SECURITY_GUARD"),
        LadyGuard => ("Lady Guard", "LADY_GUARD"),
        HeadGuard => ("Head Guard", "HEAD_GUARD"),
        ArmedGuard => ("Armed Guard", "ARMED_GUARD"),
        Supervisor => ("Supervisor", "SUPERVISOR"),
        Bouncer => ("Bouncer", "BOUNCER"),
    }
}

form_enum! {
    /// Identity and background documents an officer can present.
    ///
    /// Declaration order is the order of the verification checklist.
    DocumentType {
        AadhaarCard => ("Aadhaar Card", "AADHAAR_CARD"),
        PanCard => ("PAN Card", "PAN_CARD"),
        PoliceVerification => ("Police Verification", "POLICE_VERIFICATION"),
        VoterId => ("Voter ID", "VOTER_ID"),
        DrivingLicense => ("Driving License", "DRIVING_LICENSE"),
        Passport => ("Passport", "PASSPORT"),
        EducationCertificate => ("Education Certificate", "EDUCATION_CERTIFICATE"),
        BankPassbook => ("Bank Passbook", "BANK_PASSBOOK"),
    }
}
