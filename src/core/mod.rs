pub mod clock;
pub mod config;
pub mod grouping;
pub mod log;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
