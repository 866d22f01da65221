pub mod aggregate;

pub use aggregate::TicketUse;
