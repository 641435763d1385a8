mod component;

pub use component::RequestStatus;
