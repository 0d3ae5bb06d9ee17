pub mod csv_roster;

pub use csv_roster::{parse_member_records, read_member_records, MemberRecord};
