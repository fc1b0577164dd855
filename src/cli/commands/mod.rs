pub mod activate;
pub mod create;
pub mod info;
pub mod start;
