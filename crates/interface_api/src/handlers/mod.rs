//! Request handlers

pub mod health;
pub mod document;
pub mod planning;
pub mod agenda;
pub mod entries;
pub mod reports;
