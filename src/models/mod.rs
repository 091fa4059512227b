pub mod data;
pub mod notification;
pub mod options;
pub mod target;
pub mod topics;
