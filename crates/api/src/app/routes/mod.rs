pub mod system;
pub mod tickets;
