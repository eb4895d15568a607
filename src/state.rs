//! The SNOW 1.0 cipher state machine.
//!
//! The cipher combines a 16-stage LFSR over GF(2^32) with a two-register
//! finite state machine. One 32-bit keystream word is produced per clock.
//! All state lives in the [`Snow1`] value; independent instances never
//! interfere and may run on separate threads.

use core::fmt;

use crate::tables::{SBOX_0, SBOX_1, SBOX_2, SBOX_3};
use crate::{IV_MODE, STANDARD_MODE};

/// Number of 32-bit stages in the LFSR.
const LFSR_LEN: usize = 16;

/// Feedback and FSM tap offsets, relative to the window pointer.
const S1: usize = 1;
const S7: usize = 7;
const S13: usize = 13;
const S16: usize = 16;

/// Mask selecting the bit that decides whether an alpha multiplication
/// reduces modulo the field polynomial.
const HIGH_BIT: u32 = 0x8000_0000;

/// f(x) = x^32 + x^29 + x^20 + x^15 + x^10 + x + 1, truncated to 32 bits.
const ALPHA_XOR: u32 = 0x2010_8403;

/// Error returned by [`Snow1::new`] and [`Snow1::load_key`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key size was not 128 or 256 bits.
    InvalidKeySize,
    /// The mode was neither [`STANDARD_MODE`] nor [`IV_MODE`].
    InvalidMode,
    /// The key buffer held fewer than `key_bits / 8` bytes.
    KeyTooShort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize => f.write_str("key size must be 128 or 256 bits"),
            Error::InvalidMode => f.write_str("mode must be STANDARD_MODE or IV_MODE"),
            Error::KeyTooShort => f.write_str("key buffer shorter than the declared key size"),
        }
    }
}

impl core::error::Error for Error {}

/// A keyed SNOW 1.0 instance.
///
/// Construct one with [`Snow1::new`], then pull 32-bit keystream words
/// with [`Snow1::keystream`]. [`Snow1::load_key`] re-keys an existing
/// instance; the previous session leaves no trace in the new keystream.
#[derive(Clone, Debug)]
pub struct Snow1 {
    /// LFSR stages, stored twice (the "sliding window"), so that every
    /// tap offset 0..=16 from `ptr` is a direct index. Both aliases of a
    /// stage hold equal values between clocks.
    lfsr: [u32; 2 * LFSR_LEN],
    /// Index of the most recently updated stage. Decrements with wrap
    /// from 0 to 15 on every clock.
    ptr: usize,
    r1: u32,
    r2: u32,
    /// Values R1 and R2 take at the next clock, derived ahead of time by
    /// `update_internals`.
    next_r1: u32,
    next_r2: u32,
    /// Current FSM output word. XORed with the LFSR output tap during
    /// keystream production and folded into the feedback during the
    /// initial mixing clocks.
    fsm_out: u32,
}

/// Multiplication by the primitive element alpha of GF(2^32).
#[inline]
const fn alpha_mul(w: u32) -> u32 {
    if w & HIGH_BIT != 0 {
        (w << 1) ^ ALPHA_XOR
    } else {
        w << 1
    }
}

impl Snow1 {
    /// Creates a cipher instance from key material and performs the
    /// initial mixing.
    ///
    /// `key_bits` selects the key size (128 or 256); `key` must hold at
    /// least `key_bits / 8` bytes, interpreted big-endian (`key[0]` is
    /// the most significant byte of the first LFSR word). `mode` is
    /// [`STANDARD_MODE`] or [`IV_MODE`]; the IV words are ignored in
    /// standard mode. `iv1` is mixed into LFSR stage 0 and `iv2` into
    /// stage 3.
    pub fn new(key: &[u8], key_bits: u32, mode: u32, iv2: u32, iv1: u32) -> Result<Self, Error> {
        validate(key, key_bits, mode)?;
        Ok(Self::init(key, key_bits, mode, iv2, iv1))
    }

    /// Re-keys the instance in place.
    ///
    /// On error the existing state is left untouched and remains usable.
    pub fn load_key(
        &mut self,
        key: &[u8],
        key_bits: u32,
        mode: u32,
        iv2: u32,
        iv1: u32,
    ) -> Result<(), Error> {
        validate(key, key_bits, mode)?;
        *self = Self::init(key, key_bits, mode, iv2, iv1);
        Ok(())
    }

    /// Key loading and initial mixing, after argument validation.
    ///
    /// The mode value doubles as the number of initial feedback clocks:
    /// 64 in standard mode, 32 in IV mode.
    pub(crate) fn init(key: &[u8], key_bits: u32, mode: u32, iv2: u32, iv1: u32) -> Self {
        let mut lfsr = [0u32; 2 * LFSR_LEN];
        for (i, w) in lfsr.iter_mut().enumerate().take(key_bits as usize / 32) {
            *w = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }
        if key_bits == 128 {
            for i in 0..4 {
                lfsr[i + 4] = !lfsr[i];
                lfsr[i + 8] = lfsr[i];
                lfsr[i + 12] = !lfsr[i];
            }
        } else {
            for i in 0..8 {
                lfsr[i + 8] = !lfsr[i];
            }
        }
        if mode == IV_MODE {
            lfsr[0] ^= iv1;
            lfsr[3] ^= iv2;
        }
        for i in 0..LFSR_LEN {
            lfsr[i + LFSR_LEN] = lfsr[i];
        }

        let mut snow = Snow1 {
            lfsr,
            ptr: LFSR_LEN - 1,
            r1: 0,
            r2: 0,
            next_r1: 0,
            next_r2: 0,
            fsm_out: 0,
        };
        snow.update_internals();
        for _ in 0..mode {
            snow.feedback_clock();
            snow.update_internals();
        }
        snow
    }

    /// Produces the next 32-bit keystream word and advances the state.
    #[inline]
    pub fn keystream(&mut self) -> u32 {
        let running_key = self.fsm_out ^ self.lfsr[self.ptr + S16];
        self.clock();
        self.update_internals();
        running_key
    }

    /// Derives `fsm_out`, `next_r1` and `next_r2` from the current LFSR
    /// and FSM registers. Mutates nothing else; idempotent until the
    /// next clock.
    #[inline]
    fn update_internals(&mut self) {
        self.fsm_out = self.r1.wrapping_add(self.lfsr[self.ptr + S1]) ^ self.r2;
        let tmp = self.fsm_out.wrapping_add(self.r2).rotate_left(7);
        self.next_r1 = tmp ^ self.r1;
        self.next_r2 = SBOX_0[(self.r1 & 0xff) as usize]
            | SBOX_1[((self.r1 >> 8) & 0xff) as usize]
            | SBOX_2[((self.r1 >> 16) & 0xff) as usize]
            | SBOX_3[(self.r1 >> 24) as usize];
    }

    /// One LFSR step plus the FSM register commit.
    #[inline]
    fn clock(&mut self) {
        let feedback = alpha_mul(
            self.lfsr[self.ptr + S7] ^ self.lfsr[self.ptr + S13] ^ self.lfsr[self.ptr + S16],
        );
        self.shift_in(feedback);
    }

    /// Like [`Snow1::clock`], with the FSM output folded into the
    /// feedback. Used only during initial mixing.
    #[inline]
    fn feedback_clock(&mut self) {
        let feedback = alpha_mul(
            self.lfsr[self.ptr + S7]
                ^ self.lfsr[self.ptr + S13]
                ^ self.lfsr[self.ptr + S16]
                ^ self.fsm_out,
        );
        self.shift_in(feedback);
    }

    /// Writes both window aliases of the current stage, steps the
    /// pointer and commits the precomputed FSM registers.
    #[inline]
    fn shift_in(&mut self, feedback: u32) {
        self.lfsr[self.ptr] = feedback;
        self.lfsr[self.ptr + LFSR_LEN] = feedback;
        self.ptr = if self.ptr == 0 { LFSR_LEN - 1 } else { self.ptr - 1 };
        self.r1 = self.next_r1;
        self.r2 = self.next_r2;
    }
}

fn validate(key: &[u8], key_bits: u32, mode: u32) -> Result<(), Error> {
    if key_bits != 128 && key_bits != 256 {
        return Err(Error::InvalidKeySize);
    }
    if mode != STANDARD_MODE && mode != IV_MODE {
        return Err(Error::InvalidMode);
    }
    if key.len() < key_bits as usize / 8 {
        return Err(Error::KeyTooShort);
    }
    Ok(())
}

#[cfg(feature = "zeroize")]
impl Drop for Snow1 {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.lfsr.zeroize();
        self.r1.zeroize();
        self.r2.zeroize();
        self.next_r1.zeroize();
        self.next_r2.zeroize();
        self.fsm_out.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for Snow1 {}
