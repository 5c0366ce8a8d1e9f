use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date;
use crate::utils::date::serializer;

// MemberDto is a data transfer object for the Roster service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct MemberDto {
    pub member_id: i64,
    pub name: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl MemberDto {
    pub fn new(member_id: i64, name: &str) -> MemberDto {
        MemberDto {
            member_id,
            name: name.to_string(),
            created_at: date::now(),
        }
    }
}

impl Identifiable for MemberDto {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}

impl Display for MemberDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Member {}: {}", self.member_id, self.name)
    }
}
