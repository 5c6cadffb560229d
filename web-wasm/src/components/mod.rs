//! UIコンポーネント

pub mod copy_chat;
pub mod csv_drop_zone;
pub mod csv_upload;
pub mod header;
pub mod pop_create;
pub mod ranking;
pub mod snackbar;
