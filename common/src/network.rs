pub mod address;
pub mod bits;
pub mod host_order;
pub mod interface;
pub mod netmask;
pub mod range;
pub mod socket;
pub mod transition;
