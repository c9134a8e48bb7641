pub mod case;
pub mod config;
pub mod filter;
pub mod inventory;
pub mod plan;
pub mod suite;

mod error;
pub use error::*;

mod hook;
pub use hook::*;

#[cfg(test)]
mod test_support;

#[doc(hidden)]
pub mod __private {
    pub use linkme;
}
