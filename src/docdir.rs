pub mod action;
pub mod base;
pub mod domain;
