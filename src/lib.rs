//! SNOW 1.0 synchronous stream cipher.
//!
//! SNOW generates a keystream of 32-bit words from a 16-stage LFSR over
//! GF(2^32) driven together with a two-register finite state machine. A
//! key is 128 or 256 bits; an optional 64-bit IV selects a shorter
//! initial mixing (32 feedback clocks instead of 64).
//!
//! The word-oriented state machine is exposed directly as [`Snow1`];
//! byte-oriented use goes through the re-exported [`cipher`] traits,
//! where every 4-byte keystream block is one word in big-endian order.
//!
//! # ⚠️ Compatibility Warning
//!
//! The FSM S-box tables in this crate are an **unverified placeholder**.
//! The published SNOW 1.0 distribution ships the expanded tables in
//! `snowtab.h`; those exact values were not available when this crate's
//! tables were pinned, so `tables.rs` carries a substitute expansion and
//! the test vectors are pinned from it. Until the published table values
//! are dropped in and verified against the published test vectors, the
//! keystream **will not match** any other SNOW 1.0 implementation. Do
//! not use this crate where interoperability with SNOW 1.0 is required.
//!
//! ```
//! use snow1::{Snow1, STANDARD_MODE};
//!
//! let key = [0u8; 16];
//! let mut snow = Snow1::new(&key, 128, STANDARD_MODE, 0, 0)?;
//! let word: u32 = snow.keystream();
//! # let _ = word;
//! # Ok::<(), snow1::Error>(())
//! ```
//!
//! This crate deliberately implements SNOW 1.0 only; the keystream is
//! not compatible with SNOW 2.0, SNOW 3G or SNOW-V.

#![no_std]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

pub use cipher;

mod core;
mod state;
mod tables;

pub use crate::core::{Snow1Core, Snow1Variant, Snow1_128, Snow1_256};
pub use crate::state::{Error, Snow1};

use cipher::StreamCipherCoreWrapper;

/// Standard mode: no IV is injected and the key loader runs 64 initial
/// feedback clocks. The value doubles as the clock count.
pub const STANDARD_MODE: u32 = 64;

/// IV mode: the two IV words are injected into the LFSR and the key
/// loader runs 32 initial feedback clocks. The value doubles as the
/// clock count.
pub const IV_MODE: u32 = 32;

/// SNOW 1.0 with a 128-bit key, buffered for byte-oriented use.
#[allow(non_camel_case_types)]
pub type Snow1_128Cipher = StreamCipherCoreWrapper<Snow1Core<Snow1_128>>;

/// SNOW 1.0 with a 256-bit key, buffered for byte-oriented use.
#[allow(non_camel_case_types)]
pub type Snow1_256Cipher = StreamCipherCoreWrapper<Snow1Core<Snow1_256>>;
