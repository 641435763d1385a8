mod component;

pub use component::MembershipTable;
