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
mod mul;
mod projective;

pub mod b283;
pub mod k283;
pub mod params;
pub mod tau;

pub use crate::affine::AffinePoint;
pub use crate::params::{BinCurveParams, CoeffKind};
pub use crate::projective::ProjectivePoint;
pub use crate::tau::TauContext;
pub use binfield;
pub use mpint;
