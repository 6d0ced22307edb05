#![allow(dead_code)]

pub mod assertions;
pub mod catalog;
pub mod http;
