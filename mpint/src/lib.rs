#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod digits;
mod error;
mod int;

pub mod limb;
pub mod rec;
pub mod uint;

pub use crate::digits::{MAX_BITS, MAX_DIGITS};
pub use crate::error::{Error, Result};
pub use crate::int::{Int, Sign};
pub use crate::limb::{Limb, WideLimb, LIMB_BITS};
