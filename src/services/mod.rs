// Service module exports

pub mod history;
pub mod settings;
