//! Vote direction and votable item kinds

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Direction of a vote, stored as `+1` / `-1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// Stored integer value
    #[inline]
    pub const fn value(self) -> i16 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Build from the stored integer value
    pub fn from_value(value: i16) -> Result<Self, DomainError> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(DomainError::InvalidVoteType(other)),
        }
    }
}

impl TryFrom<i16> for VoteType {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<VoteType> for i16 {
    fn from(vote: VoteType) -> Self {
        vote.value()
    }
}

// Serialized as the bare integer so clients send `{"vote_type": 1}`
impl Serialize for VoteType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i16(self.value())
    }
}

impl<'de> Deserialize<'de> for VoteType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i16::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Kind of item a vote is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Post,
    Comment,
}

impl ItemType {
    /// Name stored in the `votes.item_type` column
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "comment" => Ok(Self::Comment),
            other => Err(DomainError::InvalidItemType(other.to_string())),
        }
    }
}
