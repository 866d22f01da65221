pub mod check;

pub use check::TicketCheckField;
