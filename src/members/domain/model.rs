use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date;
use crate::utils::date::serializer;

// MemberEntity abstracts a registered library member. Members are immutable
// once created and are never removed, so member ids are never reused.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct MemberEntity {
    pub member_id: i64,
    pub name: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(member_id: i64, name: &str) -> Self {
        Self {
            member_id,
            name: name.to_string(),
            created_at: date::now(),
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Display for MemberEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Member {}: {}", self.member_id, self.name)
    }
}
