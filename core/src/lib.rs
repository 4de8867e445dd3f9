pub mod geometry;
pub mod triangle;
pub mod interaction;
pub mod tutor;
pub mod chat;
