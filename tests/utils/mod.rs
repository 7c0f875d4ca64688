#![allow(dead_code)]

pub mod form;
pub mod prelude;
mod request;
mod response;
pub mod setup;
