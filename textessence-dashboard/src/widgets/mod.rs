pub mod membership_table;
pub mod request_status;
