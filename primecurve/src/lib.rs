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

mod affine;
mod lookup_table;
mod mul;
mod projective;

pub mod p256;
pub mod params;

pub use crate::affine::AffinePoint;
pub use crate::lookup_table::LookupTable;
pub use crate::mul::FixedBaseTable;
pub use crate::params::PrimeCurveParams;
pub use crate::projective::ProjectivePoint;
pub use mpint;
pub use primefield;
