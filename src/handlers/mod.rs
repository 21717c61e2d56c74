pub mod admin;
pub mod auth;
pub mod bills;
pub mod legislators;
pub mod lobbying;
pub mod spending;
pub mod summary;
