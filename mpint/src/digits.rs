//! Digit-vector storage.
//!
//! Every [`Int`][crate::Int] owns one `Digits` value holding its magnitude
//! as a little-endian limb vector. Storage comes either from an inline
//! fixed-capacity array (the default, suitable for embedded and
//! constant-footprint builds) or from the heap when the `alloc` feature is
//! enabled. The arithmetic code is written once against this type.

use crate::limb::{Limb, LIMB_BITS};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Maximum precision of a fixed-storage integer, in bits.
pub const MAX_BITS: usize = 4096;

/// Maximum number of limbs in a fixed-storage integer.
pub const MAX_DIGITS: usize = MAX_BITS / LIMB_BITS;

/// Little-endian limb vector backing an integer magnitude.
///
/// The length tracks the number of limbs in use; callers normalize by
/// trimming high zero limbs. Exceeding [`MAX_DIGITS`] without the `alloc`
/// feature is a precision-exceeded condition and panics; sizes are bounded
/// by the inputs of each operation, so hitting the cap means the caller
/// requested more precision than this build supports.
#[derive(Clone)]
pub(crate) struct Digits {
    #[cfg(feature = "alloc")]
    limbs: Vec<Limb>,
    #[cfg(not(feature = "alloc"))]
    limbs: [Limb; MAX_DIGITS],
    #[cfg(not(feature = "alloc"))]
    len: usize,
}

impl Digits {
    /// Empty (zero-length) vector.
    pub fn new() -> Self {
        #[cfg(feature = "alloc")]
        {
            Self { limbs: Vec::new() }
        }
        #[cfg(not(feature = "alloc"))]
        {
            Self {
                limbs: [0; MAX_DIGITS],
                len: 0,
            }
        }
    }

    /// Zero-filled vector of `len` limbs.
    pub fn zeroed(len: usize) -> Self {
        let mut ret = Self::new();
        ret.resize(len);
        ret
    }

    /// Vector initialized from a limb slice.
    pub fn from_slice(src: &[Limb]) -> Self {
        let mut ret = Self::zeroed(src.len());
        ret.as_mut_slice().copy_from_slice(src);
        ret
    }

    pub fn len(&self) -> usize {
        #[cfg(feature = "alloc")]
        {
            self.limbs.len()
        }
        #[cfg(not(feature = "alloc"))]
        {
            self.len
        }
    }

    pub fn as_slice(&self) -> &[Limb] {
        #[cfg(feature = "alloc")]
        {
            &self.limbs
        }
        #[cfg(not(feature = "alloc"))]
        {
            &self.limbs[..self.len]
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        #[cfg(feature = "alloc")]
        {
            &mut self.limbs
        }
        #[cfg(not(feature = "alloc"))]
        {
            &mut self.limbs[..self.len]
        }
    }

    /// Grows or shrinks to `len` limbs, zero-filling any new high limbs.
    pub fn resize(&mut self, len: usize) {
        #[cfg(feature = "alloc")]
        {
            self.limbs.resize(len, 0);
        }
        #[cfg(not(feature = "alloc"))]
        {
            assert!(len <= MAX_DIGITS, "precision exceeded: {len} limbs");
            if len < self.len {
                for limb in &mut self.limbs[len..self.len] {
                    *limb = 0;
                }
            }
            self.len = len;
        }
    }

    /// Trims high zero limbs.
    pub fn normalize(&mut self) {
        let used = crate::uint::used(self.as_slice());
        self.resize(used);
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Digits {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Digits {}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Digits {
    fn zeroize(&mut self) {
        self.as_mut_slice().zeroize();
        self.resize(0);
    }
}
