pub mod export;
pub mod init;
pub mod root;
pub mod slots;
