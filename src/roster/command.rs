pub mod list_members_cmd;
pub mod register_member_cmd;
