pub mod decrypt;
pub mod encrypt;
pub mod list;
pub mod sign;
pub mod verify;
