mod filter;

pub use self::filter::{OrderFilter, Predicate};
