#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(test)]
extern crate std;

mod element;
mod invert;

pub mod arith;
pub mod b283;
pub mod params;

pub use crate::element::FieldElement;
pub use crate::params::BinFieldParams;
pub use mpint;
pub use rand_core;
pub use subtle;
