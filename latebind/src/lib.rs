pub mod config_values;
pub mod error;
pub mod format;
pub mod import_token;
pub mod rewrite;
pub mod splice;
pub mod value;

#[cfg(test)]
mod splice_test;

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
