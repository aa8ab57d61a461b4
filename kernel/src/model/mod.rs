pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod id;
pub mod payment;
pub mod room;
pub mod ticket;
pub mod ticket_type;
pub mod user;
