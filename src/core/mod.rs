pub mod extract;
pub mod format;
pub mod fuzzy;
pub mod logging;
pub mod paginate;
pub mod service;
pub mod taxonomy;
pub mod tokenize;
