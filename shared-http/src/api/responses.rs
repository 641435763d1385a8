use serde::{Deserialize, Serialize};

/// Whether a corpus is part of the aggregate query.
///
/// Travels as the integer flag `0` or `1`; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Membership {
    Excluded,
    Included,
}

impl Membership {
    pub fn is_included(self) -> bool {
        matches!(self, Membership::Included)
    }
}

impl TryFrom<u8> for Membership {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Membership::Excluded),
            1 => Ok(Membership::Included),
            other => Err(format!("Checked must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Membership> for u8 {
    fn from(membership: Membership) -> Self {
        match membership {
            Membership::Excluded => 0,
            Membership::Included => 1,
        }
    }
}

impl From<bool> for Membership {
    fn from(included: bool) -> Self {
        if included {
            Membership::Included
        } else {
            Membership::Excluded
        }
    }
}

/// One corpus row of the membership response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Checked")]
    pub checked: Membership,
}

impl MembershipRecord {
    pub fn new(source: impl Into<String>, checked: impl Into<Membership>) -> Self {
        Self {
            source: source.into(),
            checked: checked.into(),
        }
    }
}
