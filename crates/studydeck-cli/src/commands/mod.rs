pub mod classify;
pub mod evaluate;
pub mod init;
pub mod study;
pub mod validate;
