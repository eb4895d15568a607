//! RustCrypto `cipher` trait bindings.
//!
//! [`Snow1Core`] exposes the state machine as a keystream-block producer:
//! each 4-byte block is one 32-bit keystream word serialized big-endian.
//! The XOR combination with plaintext is left to the
//! [`cipher::StreamCipherCoreWrapper`] around it.

use core::marker::PhantomData;

use cipher::{
    consts::{U1, U16, U32, U4, U8},
    generic_array::ArrayLength,
    Block, BlockSizeUser, Iv, IvSizeUser, Key, KeyInit, KeyIvInit, KeySizeUser,
    ParBlocksSizeUser, StreamBackend, StreamCipherCore, StreamClosure,
};

use crate::state::Snow1;
use crate::{IV_MODE, STANDARD_MODE};

/// Security parameters of a SNOW 1.0 variant.
pub trait Snow1Variant {
    /// Key size in bytes.
    type KeySize: ArrayLength<u8> + 'static;
    /// Key size in bits.
    const KEY_BITS: u32;
}

/// The 128-bit key variant.
#[derive(Clone)]
#[allow(non_camel_case_types)]
pub struct Snow1_128;

impl Snow1Variant for Snow1_128 {
    type KeySize = U16;
    const KEY_BITS: u32 = 128;
}

/// The 256-bit key variant.
#[derive(Clone)]
#[allow(non_camel_case_types)]
pub struct Snow1_256;

impl Snow1Variant for Snow1_256 {
    type KeySize = U32;
    const KEY_BITS: u32 = 256;
}

/// The SNOW 1.0 stream cipher core.
///
/// [`KeyInit::new`] keys the cipher in standard mode (64 mixing clocks,
/// no IV). [`KeyIvInit::new`] keys it in IV mode (32 mixing clocks) with
/// an 8-byte big-endian IV laid out as `IV1 || IV2`: the first word is
/// mixed into LFSR stage 0 and the second into stage 3.
pub struct Snow1Core<V: Snow1Variant> {
    state: Snow1,
    _variant: PhantomData<V>,
}

impl<V: Snow1Variant> Clone for Snow1Core<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: Snow1Variant> KeySizeUser for Snow1Core<V> {
    type KeySize = V::KeySize;
}

impl<V: Snow1Variant> IvSizeUser for Snow1Core<V> {
    type IvSize = U8;
}

impl<V: Snow1Variant> BlockSizeUser for Snow1Core<V> {
    type BlockSize = U4;
}

impl<V: Snow1Variant> KeyInit for Snow1Core<V> {
    fn new(key: &Key<Self>) -> Self {
        // The key length is fixed by the type, so the load cannot fail.
        Self {
            state: Snow1::init(key, V::KEY_BITS, STANDARD_MODE, 0, 0),
            _variant: PhantomData,
        }
    }
}

impl<V: Snow1Variant> KeyIvInit for Snow1Core<V> {
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        let iv1 = u32::from_be_bytes([iv[0], iv[1], iv[2], iv[3]]);
        let iv2 = u32::from_be_bytes([iv[4], iv[5], iv[6], iv[7]]);
        Self {
            state: Snow1::init(key, V::KEY_BITS, IV_MODE, iv2, iv1),
            _variant: PhantomData,
        }
    }
}

impl<V: Snow1Variant> StreamCipherCore for Snow1Core<V> {
    fn remaining_blocks(&self) -> Option<usize> {
        None
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut Snow1Backend(&mut self.state));
    }
}

/// The single software backend; SNOW 1.0 is a table-driven scalar design.
struct Snow1Backend<'a>(&'a mut Snow1);

impl BlockSizeUser for Snow1Backend<'_> {
    type BlockSize = U4;
}

impl ParBlocksSizeUser for Snow1Backend<'_> {
    type ParBlocksSize = U1;
}

impl StreamBackend for Snow1Backend<'_> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        block.copy_from_slice(&self.0.keystream().to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use cipher::{KeyInit, KeyIvInit, StreamCipher};

    use crate::{Snow1, Snow1_128Cipher, Snow1_256Cipher, STANDARD_MODE};

    #[test]
    fn wrapper_emits_big_endian_words() {
        let mut key = [0u8; 16];
        key[0] = 0x80;
        let iv = [0xaa, 0xaa, 0xaa, 0xaa, 0x01, 0x23, 0x45, 0x67];

        let mut cipher = <Snow1_128Cipher as KeyIvInit>::new(&key.into(), &iv.into());
        let mut buf = [0u8; 16];
        cipher.apply_keystream(&mut buf);
        // First four words of the 128-bit-key IV-mode vector, high byte first.
        assert_eq!(
            buf,
            [
                0xb7, 0xb7, 0x71, 0xbd, 0x4c, 0x4b, 0x73, 0xf3,
                0xb1, 0xd2, 0x81, 0x2c, 0x29, 0x59, 0x19, 0x8f,
            ]
        );
    }

    #[test]
    fn key_init_matches_raw_standard_mode() {
        let key = [0x5a; 32];
        let mut cipher = <Snow1_256Cipher as KeyInit>::new(&key.into());
        let mut bytes = [0u8; 32];
        cipher.apply_keystream(&mut bytes);

        let mut raw = Snow1::new(&key, 256, STANDARD_MODE, 0, 0).unwrap();
        for chunk in bytes.chunks_exact(4) {
            assert_eq!(chunk, raw.keystream().to_be_bytes().as_slice());
        }
    }

    #[test]
    fn standard_and_iv_mode_differ() {
        let key = [0x33; 16];
        let mut std_mode = <Snow1_128Cipher as KeyInit>::new(&key.into());
        let mut iv_mode = <Snow1_128Cipher as KeyIvInit>::new(&key.into(), &[0u8; 8].into());

        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        std_mode.apply_keystream(&mut a);
        iv_mode.apply_keystream(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let key = [0x21; 16];
        let iv = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80];
        let plain = *b"an eleven-word message padded..!";

        let mut data = plain;
        let mut enc = <Snow1_128Cipher as KeyIvInit>::new(&key.into(), &iv.into());
        enc.apply_keystream(&mut data);
        assert_ne!(data, plain);

        let mut dec = <Snow1_128Cipher as KeyIvInit>::new(&key.into(), &iv.into());
        dec.apply_keystream(&mut data);
        assert_eq!(data, plain);
    }
}
