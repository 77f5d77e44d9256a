pub mod builder;
pub mod bundle;
pub mod candidate;
pub mod stable;
