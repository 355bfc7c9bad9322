pub mod history;
pub mod search;
