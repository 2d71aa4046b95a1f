pub mod draft;
pub mod export;
pub mod limit;
pub mod parse;
pub mod search;
