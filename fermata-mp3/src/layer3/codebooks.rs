// Fermata
// Copyright (c) 2026 The Fermata Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Packed Huffman codebooks for the big_values pair tables and the count1
//! quad tables of ISO/IEC 11172-3 table B.7.
//!
//! Each codebook is a flattened two-level lookup table. The first
//! `1 << init_bits` entries form the root table; sub-tables for codewords
//! longer than `init_bits` follow. An entry is one of:
//!
//! ```text
//! 0x0000_0000                        invalid codeword
//! 0x8000_0000 | len << 16 | x << 4 | y   leaf (len = bits consumed at this level)
//! sub_bits << 16 | offset            jump to the sub-table at `offset`
//! ```
//!
//! The tables were generated offline from the code lists in the standard and
//! are immutable; nothing is built at runtime.

/// A packed two-level lookup table for one Huffman codebook.
pub struct Codebook {
    /// The number of bits to read for the initial lookup in the table.
    pub init_bits: u32,
    /// The packed lookup entries.
    pub data: &'static [u32],
}

impl Codebook {
    /// Returns true if the codebook contains no codewords (the zero table).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The empty codebook used for tables 0, 4, and 14.
pub const HUFFMAN_TABLE_0: Codebook = Codebook { init_bits: 0, data: &[] };


/// Huffman codebook for pair table 1.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_1: Codebook = Codebook {
    init_bits: 3,
    data: &[
        0x80030011, 0x80030001, 0x80020010, 0x80020010, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
    ],
};

/// Huffman codebook for pair table 2.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_2: Codebook = Codebook {
    init_bits: 6,
    data: &[
        0x80060022, 0x80060002, 0x80050012, 0x80050012, 0x80050021, 0x80050021, 0x80050020, 0x80050020,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
    ],
};

/// Huffman codebook for pair table 3.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_3: Codebook = Codebook {
    init_bits: 6,
    data: &[
        0x80060022, 0x80060002, 0x80050012, 0x80050012, 0x80050021, 0x80050021, 0x80050020, 0x80050020,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001,
        0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001, 0x80020001,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
    ],
};

/// Huffman codebook for pair table 5.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_5: Codebook = Codebook {
    init_bits: 8,
    data: &[
        0x80080033, 0x80080023, 0x80070032, 0x80070032, 0x80060031, 0x80060031, 0x80060031, 0x80060031,
        0x80070013, 0x80070013, 0x80070003, 0x80070003, 0x80070030, 0x80070030, 0x80070022, 0x80070022,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
    ],
};

/// Huffman codebook for pair table 6.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_6: Codebook = Codebook {
    init_bits: 7,
    data: &[
        0x80070033, 0x80070003, 0x80060023, 0x80060023, 0x80060032, 0x80060032, 0x80060030, 0x80060030,
        0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050031, 0x80050031, 0x80050031, 0x80050031,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
    ],
};

/// Huffman codebook for pair table 7.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_7: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00010200, 0x00010202, 0x80090035, 0x80090044, 0x80090025, 0x80090052, 0x80080015, 0x80080015,
        0x80080051, 0x80080051, 0x80090005, 0x80090034, 0x80080050, 0x80080050, 0x80090043, 0x80090033,
        0x80080024, 0x80080024, 0x80080042, 0x80080042, 0x80070014, 0x80070014, 0x80070014, 0x80070014,
        0x80070041, 0x80070041, 0x80070041, 0x80070041, 0x80070040, 0x80070040, 0x80070040, 0x80070040,
        0x80080004, 0x80080004, 0x80080023, 0x80080023, 0x80080032, 0x80080032, 0x80080003, 0x80080003,
        0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070031, 0x80070031, 0x80070031, 0x80070031,
        0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070022, 0x80070022, 0x80070022, 0x80070022,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010055, 0x80010045, 0x80010054, 0x80010053,
    ],
};

/// Huffman codebook for pair table 8.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_8: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00020200, 0x80090053, 0x00010204, 0x80090025, 0x80090052, 0x80090005, 0x80080015, 0x80080015,
        0x80080051, 0x80080051, 0x80090034, 0x80090043, 0x80090050, 0x80090033, 0x80080024, 0x80080024,
        0x80080042, 0x80080042, 0x80080014, 0x80080014, 0x80070041, 0x80070041, 0x80070041, 0x80070041,
        0x80080004, 0x80080004, 0x80080040, 0x80080040, 0x80080023, 0x80080023, 0x80080032, 0x80080032,
        0x80080013, 0x80080013, 0x80080031, 0x80080031, 0x80080003, 0x80080003, 0x80080030, 0x80080030,
        0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011, 0x80020011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020055, 0x80020054, 0x80010045, 0x80010045, 0x80010035, 0x80010044,
    ],
};

/// Huffman codebook for pair table 9.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_9: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x80090055, 0x80090045, 0x80080035, 0x80080035, 0x80080053, 0x80080053, 0x80090054, 0x80090005,
        0x80080044, 0x80080044, 0x80080025, 0x80080025, 0x80080052, 0x80080052, 0x80080015, 0x80080015,
        0x80070051, 0x80070051, 0x80070051, 0x80070051, 0x80070034, 0x80070034, 0x80070034, 0x80070034,
        0x80070043, 0x80070043, 0x80070043, 0x80070043, 0x80080050, 0x80080050, 0x80080004, 0x80080004,
        0x80070024, 0x80070024, 0x80070024, 0x80070024, 0x80070042, 0x80070042, 0x80070042, 0x80070042,
        0x80070033, 0x80070033, 0x80070033, 0x80070033, 0x80070040, 0x80070040, 0x80070040, 0x80070040,
        0x80060014, 0x80060014, 0x80060014, 0x80060014, 0x80060014, 0x80060014, 0x80060014, 0x80060014,
        0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041,
        0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023,
        0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032,
        0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013,
        0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013,
        0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031,
        0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031,
        0x80060003, 0x80060003, 0x80060003, 0x80060003, 0x80060003, 0x80060003, 0x80060003, 0x80060003,
        0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020,
        0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020,
        0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020,
        0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020, 0x80040020,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
    ],
};

/// Huffman codebook for pair table 10.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_10: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00020200, 0x00020204, 0x00010208, 0x0001020a, 0x0001020c, 0x0002020e, 0x80090027, 0x80090072,
        0x00010212, 0x80090070, 0x80090062, 0x00010214, 0x80090006, 0x00010216, 0x80080017, 0x80080017,
        0x80080071, 0x80080071, 0x80090036, 0x80090026, 0x00010218, 0x80090015, 0x80090051, 0x0001021a,
        0x80080016, 0x80080016, 0x80080061, 0x80080061, 0x80080060, 0x80080060, 0x80090005, 0x80090050,
        0x80090024, 0x80090042, 0x80090033, 0x80090004, 0x80080014, 0x80080014, 0x80080041, 0x80080041,
        0x80080040, 0x80080040, 0x80080023, 0x80080023, 0x80080032, 0x80080032, 0x80080003, 0x80080003,
        0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070031, 0x80070031, 0x80070031, 0x80070031,
        0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070022, 0x80070022, 0x80070022, 0x80070022,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80020077, 0x80020067, 0x80020076, 0x80020057, 0x80020075, 0x80020066, 0x80010047, 0x80010047,
        0x80010074, 0x80010056, 0x80010065, 0x80010037, 0x80010073, 0x80010046, 0x80020055, 0x80020054,
        0x80010063, 0x80010063, 0x80010064, 0x80010007, 0x80010045, 0x80010035, 0x80010053, 0x80010044,
        0x80010025, 0x80010052, 0x80010034, 0x80010043,
    ],
};

/// Huffman codebook for pair table 11.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_11: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00010200, 0x00010202, 0x00010204, 0x00020206, 0x0001020a, 0x80090037, 0x80090073, 0x80090046,
        0x0001020c, 0x0001020e, 0x80080027, 0x80080027, 0x80080072, 0x80080072, 0x80090064, 0x80090007,
        0x80070071, 0x80070071, 0x80070071, 0x80070071, 0x80080017, 0x80080017, 0x80080070, 0x80080070,
        0x80080036, 0x80080036, 0x80080063, 0x80080063, 0x80080060, 0x80080060, 0x80090044, 0x80090025,
        0x80090052, 0x80090005, 0x80080015, 0x80080015, 0x80070062, 0x80070062, 0x80070062, 0x80070062,
        0x80080026, 0x80080026, 0x80080006, 0x80080006, 0x80070016, 0x80070016, 0x80070016, 0x80070016,
        0x80070061, 0x80070061, 0x80070061, 0x80070061, 0x80080051, 0x80080051, 0x80080034, 0x80080034,
        0x80080050, 0x80080050, 0x80090043, 0x80090033, 0x80080024, 0x80080024, 0x80080042, 0x80080042,
        0x80080014, 0x80080014, 0x80080041, 0x80080041, 0x80080004, 0x80080004, 0x80080040, 0x80080040,
        0x80070023, 0x80070023, 0x80070023, 0x80070023, 0x80070032, 0x80070032, 0x80070032, 0x80070032,
        0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013,
        0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031,
        0x80070003, 0x80070003, 0x80070003, 0x80070003, 0x80070030, 0x80070030, 0x80070030, 0x80070030,
        0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022, 0x80060022,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000, 0x80020000,
        0x80010077, 0x80010067, 0x80010076, 0x80010075, 0x80010066, 0x80010047, 0x80010074, 0x80010074,
        0x80020057, 0x80020055, 0x80010056, 0x80010065, 0x80010045, 0x80010054, 0x80010035, 0x80010053,
    ],
};

/// Huffman codebook for pair table 12.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_12: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00010200, 0x00010202, 0x80080076, 0x80080076, 0x80090056, 0x80090047, 0x80090074, 0x80090065,
        0x80090072, 0x80090046, 0x80080037, 0x80080037, 0x80090073, 0x80090055, 0x80080027, 0x80080027,
        0x80070066, 0x80070066, 0x80070066, 0x80070066, 0x80080064, 0x80080064, 0x80080017, 0x80080017,
        0x80080071, 0x80080071, 0x80090007, 0x80090070, 0x80080036, 0x80080036, 0x80080063, 0x80080063,
        0x80080045, 0x80080045, 0x80080054, 0x80080054, 0x80080044, 0x80080044, 0x80090006, 0x80090005,
        0x80070026, 0x80070026, 0x80070026, 0x80070026, 0x80070062, 0x80070062, 0x80070062, 0x80070062,
        0x80070061, 0x80070061, 0x80070061, 0x80070061, 0x80080016, 0x80080016, 0x80080060, 0x80080060,
        0x80080035, 0x80080035, 0x80080053, 0x80080053, 0x80080025, 0x80080025, 0x80080052, 0x80080052,
        0x80070015, 0x80070015, 0x80070015, 0x80070015, 0x80070051, 0x80070051, 0x80070051, 0x80070051,
        0x80070034, 0x80070034, 0x80070034, 0x80070034, 0x80070043, 0x80070043, 0x80070043, 0x80070043,
        0x80080050, 0x80080050, 0x80080004, 0x80080004, 0x80070024, 0x80070024, 0x80070024, 0x80070024,
        0x80070042, 0x80070042, 0x80070042, 0x80070042, 0x80070014, 0x80070014, 0x80070014, 0x80070014,
        0x80060033, 0x80060033, 0x80060033, 0x80060033, 0x80060033, 0x80060033, 0x80060033, 0x80060033,
        0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041,
        0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023,
        0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032,
        0x80070040, 0x80070040, 0x80070040, 0x80070040, 0x80070003, 0x80070003, 0x80070003, 0x80070003,
        0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030,
        0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013,
        0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013, 0x80050013,
        0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031,
        0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031, 0x80050031,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012, 0x80040012,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021, 0x80040021,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001, 0x80030001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010077, 0x80010067, 0x80010057, 0x80010075,
    ],
};

/// Huffman codebook for pair table 13.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_13: Codebook = Codebook {
    init_bits: 10,
    data: &[
        0x00090400, 0x00050600, 0x00040620, 0x00040630, 0x00030640, 0x00030648, 0x00030650, 0x00030658,
        0x00030660, 0x00030668, 0x00030670, 0x00020678, 0x0002067c, 0x00010680, 0x00010682, 0x00020684,
        0x00020688, 0x0002068c, 0x00020690, 0x00020694, 0x00020698, 0x0002069c, 0x000206a0, 0x800a00b2,
        0x800a001b, 0x800a00b1, 0x000106a4, 0x000106a6, 0x000106a8, 0x000106aa, 0x800a002a, 0x800a00a2,
        0x800a001a, 0x800a00a1, 0x000106ac, 0x800a00a0, 0x000106ae, 0x800a0093, 0x000106b0, 0x000106b2,
        0x800a0029, 0x800a0092, 0x000106b4, 0x800a0038, 0x800a0083, 0x000106b6, 0x000106b8, 0x000106ba,
        0x80090019, 0x80090019, 0x80090091, 0x80090091, 0x800a0009, 0x800a0090, 0x800a0048, 0x800a0084,
        0x800a0072, 0x000106bc, 0x80090028, 0x80090028, 0x80090082, 0x80090082, 0x80090018, 0x80090018,
        0x800a0037, 0x800a0027, 0x80090017, 0x80090017, 0x80090071, 0x80090071, 0x800a0055, 0x800a0007,
        0x800a0070, 0x800a0036, 0x800a0063, 0x800a0045, 0x800a0054, 0x800a0026, 0x800a0062, 0x800a0035,
        0x80080081, 0x80080081, 0x80080081, 0x80080081, 0x80090008, 0x80090008, 0x80090080, 0x80090080,
        0x80090016, 0x80090016, 0x80090061, 0x80090061, 0x80090006, 0x80090006, 0x80090060, 0x80090060,
        0x800a0053, 0x800a0044, 0x80090025, 0x80090025, 0x80090052, 0x80090052, 0x80090005, 0x80090005,
        0x80080015, 0x80080015, 0x80080015, 0x80080015, 0x80080051, 0x80080051, 0x80080051, 0x80080051,
        0x80090034, 0x80090034, 0x80090043, 0x80090043, 0x80090050, 0x80090050, 0x80090024, 0x80090024,
        0x80090042, 0x80090042, 0x80090033, 0x80090033, 0x80080014, 0x80080014, 0x80080014, 0x80080014,
        0x80070041, 0x80070041, 0x80070041, 0x80070041, 0x80070041, 0x80070041, 0x80070041, 0x80070041,
        0x80080004, 0x80080004, 0x80080004, 0x80080004, 0x80080040, 0x80080040, 0x80080040, 0x80080040,
        0x80080023, 0x80080023, 0x80080023, 0x80080023, 0x80080032, 0x80080032, 0x80080032, 0x80080032,
        0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013,
        0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031,
        0x80070003, 0x80070003, 0x80070003, 0x80070003, 0x80070003, 0x80070003, 0x80070003, 0x80070003,
        0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070030, 0x80070030,
        0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x800900fe, 0x800900fc, 0x800800fd, 0x800800fd, 0x800700ed, 0x800700ed, 0x800700ed, 0x800700ed,
        0x800600ff, 0x800600ff, 0x800600ff, 0x800600ff, 0x800600ff, 0x800600ff, 0x800600ff, 0x800600ff,
        0x800600ef, 0x800600ef, 0x800600ef, 0x800600ef, 0x800600ef, 0x800600ef, 0x800600ef, 0x800600ef,
        0x800600df, 0x800600df, 0x800600df, 0x800600df, 0x800600df, 0x800600df, 0x800600df, 0x800600df,
        0x800600ee, 0x800600ee, 0x800600ee, 0x800600ee, 0x800600ee, 0x800600ee, 0x800600ee, 0x800600ee,
        0x800600cf, 0x800600cf, 0x800600cf, 0x800600cf, 0x800600cf, 0x800600cf, 0x800600cf, 0x800600cf,
        0x800600de, 0x800600de, 0x800600de, 0x800600de, 0x800600de, 0x800600de, 0x800600de, 0x800600de,
        0x800600bf, 0x800600bf, 0x800600bf, 0x800600bf, 0x800600bf, 0x800600bf, 0x800600bf, 0x800600bf,
        0x800600fb, 0x800600fb, 0x800600fb, 0x800600fb, 0x800600fb, 0x800600fb, 0x800600fb, 0x800600fb,
        0x800600ce, 0x800600ce, 0x800600ce, 0x800600ce, 0x800600ce, 0x800600ce, 0x800600ce, 0x800600ce,
        0x800600dc, 0x800600dc, 0x800600dc, 0x800600dc, 0x800600dc, 0x800600dc, 0x800600dc, 0x800600dc,
        0x800700af, 0x800700af, 0x800700af, 0x800700af, 0x800700e9, 0x800700e9, 0x800700e9, 0x800700e9,
        0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec,
        0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec, 0x800500ec,
        0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd,
        0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd, 0x800500dd,
        0x800600fa, 0x800600fa, 0x800600fa, 0x800600fa, 0x800600fa, 0x800600fa, 0x800600fa, 0x800600fa,
        0x800600cd, 0x800600cd, 0x800600cd, 0x800600cd, 0x800600cd, 0x800600cd, 0x800600cd, 0x800600cd,
        0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be,
        0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be, 0x800500be,
        0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb,
        0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb, 0x800500eb,
        0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f,
        0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f, 0x8005009f,
        0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9,
        0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9, 0x800500f9,
        0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea,
        0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea, 0x800500ea,
        0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd,
        0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd, 0x800500bd,
        0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db,
        0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db, 0x800500db,
        0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f,
        0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f, 0x8005008f,
        0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8,
        0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8, 0x800500f8,
        0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc,
        0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc, 0x800500cc,
        0x800600ae, 0x800600ae, 0x800600ae, 0x800600ae, 0x800600ae, 0x800600ae, 0x800600ae, 0x800600ae,
        0x8006009e, 0x8006009e, 0x8006009e, 0x8006009e, 0x8006009e, 0x8006009e, 0x8006009e, 0x8006009e,
        0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e,
        0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e, 0x8005008e,
        0x8006007f, 0x8006007f, 0x8006007f, 0x8006007f, 0x8006007f, 0x8006007f, 0x8006007f, 0x8006007f,
        0x8006007e, 0x8006007e, 0x8006007e, 0x8006007e, 0x8006007e, 0x8006007e, 0x8006007e, 0x8006007e,
        0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7,
        0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7,
        0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7,
        0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7, 0x800400f7,
        0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da,
        0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da,
        0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da,
        0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da, 0x800400da,
        0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad,
        0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad, 0x800500ad,
        0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc,
        0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc, 0x800500bc,
        0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb,
        0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb, 0x800500cb,
        0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6,
        0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6, 0x800500f6,
        0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f,
        0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f,
        0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f,
        0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f, 0x8004006f,
        0x800400e8, 0x800400e8, 0x8004005f, 0x8004005f, 0x8004009d, 0x8004009d, 0x800400d9, 0x800400d9,
        0x800400f5, 0x800400f5, 0x800400e7, 0x800400e7, 0x800400ac, 0x800400ac, 0x800400bb, 0x800400bb,
        0x8004004f, 0x8004004f, 0x800400f4, 0x800400f4, 0x800500ca, 0x8005004d, 0x800400f3, 0x800400f3,
        0x8003003f, 0x8003003f, 0x8003003f, 0x8003003f, 0x8004008d, 0x8004008d, 0x800400d8, 0x800400d8,
        0x8003002f, 0x8003002f, 0x800300f2, 0x800300f2, 0x8004006e, 0x8004009c, 0x8003000f, 0x8003000f,
        0x800400c9, 0x8004005e, 0x800300ab, 0x800300ab, 0x8004007d, 0x800400d7, 0x8003004e, 0x8003004e,
        0x800400c8, 0x800400d6, 0x8003003e, 0x8003003e, 0x800300b9, 0x800300b9, 0x8004009b, 0x800400aa,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x800200f1, 0x800200f1, 0x800200f1, 0x800200f1,
        0x800200f0, 0x800200f0, 0x800300ba, 0x800300e5, 0x800300e4, 0x8003008c, 0x8003006d, 0x800300e3,
        0x800200e2, 0x800200e2, 0x8003002e, 0x8003000e, 0x8002001e, 0x8002001e, 0x800200e1, 0x800200e1,
        0x800300e0, 0x8003005d, 0x800300d5, 0x8003007c, 0x800300c7, 0x800300e6, 0x8003008b, 0x800300b8,
        0x800300d4, 0x8003009a, 0x800300a9, 0x8003006c, 0x800200c6, 0x800200c6, 0x8002003d, 0x8002003d,
        0x800300d3, 0x8003007b, 0x8002002d, 0x8002002d, 0x800200d2, 0x800200d2, 0x8002001d, 0x8002001d,
        0x800200b7, 0x800200b7, 0x8003005c, 0x800300c5, 0x80030099, 0x8003007a, 0x800200c3, 0x800200c3,
        0x800300a7, 0x80030097, 0x8002004b, 0x8002004b, 0x800100d1, 0x800100d1, 0x800100d1, 0x800100d1,
        0x8002000d, 0x800200d0, 0x8002008a, 0x800200a8, 0x8002004c, 0x800200c4, 0x8002006b, 0x800200b6,
        0x8001003c, 0x8001002c, 0x800100c2, 0x8001005b, 0x800200b5, 0x80020089, 0x8001001c, 0x8001001c,
        0x800100c1, 0x800100c1, 0x80020098, 0x8002000c, 0x800100c0, 0x800100c0, 0x800200b4, 0x8002006a,
        0x800200a6, 0x80020079, 0x8001003b, 0x8001003b, 0x800100b3, 0x800100b3, 0x80020088, 0x8002005a,
        0x8001002b, 0x8001002b, 0x800200a5, 0x80020069, 0x800100a4, 0x800100a4, 0x80020078, 0x80020087,
        0x80010094, 0x80010094, 0x80020077, 0x80020076, 0x8001000b, 0x800100b0, 0x80010096, 0x8001004a,
        0x8001003a, 0x800100a3, 0x80010059, 0x80010095, 0x8001000a, 0x80010068, 0x80010086, 0x80010049,
        0x80010039, 0x80010058, 0x80010085, 0x80010067, 0x80010057, 0x80010075, 0x80010066, 0x80010047,
        0x80010074, 0x80010056, 0x80010065, 0x80010073, 0x80010046, 0x80010064,
    ],
};

/// Huffman codebook for pair table 15.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_15: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00040200, 0x00030210, 0x00030218, 0x00040220, 0x00030230, 0x00020238, 0x0003023c, 0x00020244,
        0x00030248, 0x00020250, 0x00020254, 0x00020258, 0x0002025c, 0x00020260, 0x00020264, 0x00030268,
        0x00020270, 0x00020274, 0x00020278, 0x0001027c, 0x0002027e, 0x00010282, 0x00020284, 0x00010288,
        0x0001028a, 0x0001028c, 0x0002028e, 0x00010292, 0x00010294, 0x00020296, 0x800900c2, 0x0001029a,
        0x0001029c, 0x0001029e, 0x000102a0, 0x000102a2, 0x000102a4, 0x800900b3, 0x000102a6, 0x000102a8,
        0x800900b2, 0x000102aa, 0x800900b1, 0x000102ac, 0x000102ae, 0x000102b0, 0x000102b2, 0x800900a3,
        0x80090059, 0x80090095, 0x8009002a, 0x800900a2, 0x8009001a, 0x800900a1, 0x000102b4, 0x80090068,
        0x80090086, 0x80090049, 0x80090094, 0x80090039, 0x80090093, 0x000102b6, 0x80090058, 0x80090085,
        0x80090029, 0x80090067, 0x80090076, 0x80090092, 0x80080091, 0x80080091, 0x80090019, 0x80090090,
        0x80090048, 0x80090084, 0x80090057, 0x80090075, 0x80090038, 0x80090083, 0x80090066, 0x80090047,
        0x80080028, 0x80080028, 0x80080082, 0x80080082, 0x80080018, 0x80080018, 0x80080081, 0x80080081,
        0x80090074, 0x80090008, 0x80090080, 0x80090056, 0x80090065, 0x80090037, 0x80090073, 0x80090046,
        0x80080027, 0x80080027, 0x80080072, 0x80080072, 0x80080064, 0x80080064, 0x80080017, 0x80080017,
        0x80080055, 0x80080055, 0x80080071, 0x80080071, 0x80090007, 0x80090070, 0x80080036, 0x80080036,
        0x80080063, 0x80080063, 0x80080045, 0x80080045, 0x80080054, 0x80080054, 0x80080026, 0x80080026,
        0x80080062, 0x80080062, 0x80080016, 0x80080016, 0x80090006, 0x80090060, 0x80080035, 0x80080035,
        0x80070061, 0x80070061, 0x80070061, 0x80070061, 0x80080053, 0x80080053, 0x80080044, 0x80080044,
        0x80070025, 0x80070025, 0x80070025, 0x80070025, 0x80070052, 0x80070052, 0x80070052, 0x80070052,
        0x80070015, 0x80070015, 0x80070015, 0x80070015, 0x80070051, 0x80070051, 0x80070051, 0x80070051,
        0x80080005, 0x80080005, 0x80080050, 0x80080050, 0x80070034, 0x80070034, 0x80070034, 0x80070034,
        0x80070043, 0x80070043, 0x80070043, 0x80070043, 0x80070024, 0x80070024, 0x80070024, 0x80070024,
        0x80070042, 0x80070042, 0x80070042, 0x80070042, 0x80070033, 0x80070033, 0x80070033, 0x80070033,
        0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041, 0x80060041,
        0x80070014, 0x80070014, 0x80070014, 0x80070014, 0x80070004, 0x80070004, 0x80070004, 0x80070004,
        0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023, 0x80060023,
        0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032, 0x80060032,
        0x80070040, 0x80070040, 0x80070040, 0x80070040, 0x80070003, 0x80070003, 0x80070003, 0x80070003,
        0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013, 0x80060013,
        0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031, 0x80060031,
        0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030, 0x80060030,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022, 0x80050022,
        0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012,
        0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012, 0x80050012,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021, 0x80050021,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002, 0x80050002,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020, 0x80050020,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011, 0x80030011,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010,
        0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010,
        0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010,
        0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010, 0x80040010,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000, 0x80030000,
        0x800400ff, 0x800400ef, 0x800400fe, 0x800400df, 0x800300ee, 0x800300ee, 0x800400fd, 0x800400cf,
        0x800400fc, 0x800400de, 0x800400ed, 0x800400bf, 0x800300fb, 0x800300fb, 0x800400ce, 0x800400ec,
        0x800300dd, 0x800300af, 0x800300fa, 0x800300be, 0x800300eb, 0x800300cd, 0x800300dc, 0x8003009f,
        0x800300f9, 0x800300ea, 0x800300bd, 0x800300db, 0x8003008f, 0x800300f8, 0x800300cc, 0x8003009e,
        0x800300e9, 0x800300e9, 0x8003007f, 0x8003007f, 0x800300f7, 0x800300f7, 0x800300ad, 0x800300ad,
        0x800300da, 0x800300da, 0x800300bc, 0x800300bc, 0x8003006f, 0x8003006f, 0x800400ae, 0x8004000f,
        0x800200cb, 0x800200cb, 0x800200f6, 0x800200f6, 0x8003008e, 0x800300e8, 0x8003005f, 0x8003009d,
        0x800200f5, 0x8002007e, 0x800200e7, 0x800200ac, 0x800200ca, 0x800200ca, 0x800200bb, 0x800200bb,
        0x800300d9, 0x8003008d, 0x8002004f, 0x8002004f, 0x800200f4, 0x8002003f, 0x800200f3, 0x800200d8,
        0x800200e6, 0x800200e6, 0x8002002f, 0x8002002f, 0x800200f2, 0x800200f2, 0x8003006e, 0x800300f0,
        0x8002001f, 0x800200f1, 0x8002009c, 0x800200c9, 0x8002005e, 0x800200ab, 0x800200ba, 0x800200e5,
        0x8002007d, 0x800200d7, 0x8002004e, 0x800200e4, 0x8002008c, 0x800200c8, 0x8002003e, 0x8002006d,
        0x800200d6, 0x800200e3, 0x8002009b, 0x800200b9, 0x8002002e, 0x800200aa, 0x800200e2, 0x8002001e,
        0x800200e1, 0x800200e1, 0x8003000e, 0x800300e0, 0x8002005d, 0x8002005d, 0x800200d5, 0x800200d5,
        0x8002007c, 0x800200c7, 0x8002004d, 0x8002008b, 0x800100d4, 0x800100d4, 0x800200b8, 0x8002009a,
        0x800200a9, 0x8002006c, 0x800200c6, 0x8002003d, 0x800100d3, 0x800100d2, 0x8002002d, 0x8002000d,
        0x8001001d, 0x8001001d, 0x8001007b, 0x800100b7, 0x800100d1, 0x800100d1, 0x8002005c, 0x800200d0,
        0x800100c5, 0x8001008a, 0x800100a8, 0x8001004c, 0x800100c4, 0x8001006b, 0x800100b6, 0x800100b6,
        0x80020099, 0x8002000c, 0x8001003c, 0x800100c3, 0x8001007a, 0x800100a7, 0x800100a6, 0x800100a6,
        0x800200c0, 0x8002000b, 0x8001002c, 0x8001005b, 0x800100b5, 0x8001001c, 0x80010089, 0x80010098,
        0x800100c1, 0x8001004b, 0x800100b4, 0x8001006a, 0x8001003b, 0x80010079, 0x80010097, 0x80010088,
        0x8001002b, 0x8001005a, 0x800100a5, 0x8001001b, 0x800100b0, 0x80010069, 0x80010096, 0x8001004a,
        0x800100a4, 0x80010078, 0x80010087, 0x8001003a, 0x8001000a, 0x800100a0, 0x80010077, 0x80010009,
    ],
};

/// Huffman codebook for pair table 16.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_16: Codebook = Codebook {
    init_bits: 10,
    data: &[
        0x00090400, 0x00070600, 0x00090680, 0x00010880, 0x00010882, 0x00010884, 0x00030886, 0x00000000,
        0x800a007f, 0x800a008f, 0x800a006f, 0x800a00f2, 0x0005088e, 0x800a00f0, 0x000408ae, 0x000408be,
        0x800a005f, 0x800a000f, 0x8009004f, 0x8009004f, 0x000608ce, 0x0006090e, 0x0005094e, 0x0004096e,
        0x800900f1, 0x800900f1, 0x0001097e, 0x00050980, 0x000109a0, 0x800a00f9, 0x800a00f8, 0x800a00f7,
        0x800a00f6, 0x000209a2, 0x00000000, 0x000209a6, 0x00000000, 0x000209aa, 0x00000000, 0x000609ae,
        0x000509ee, 0x00050a0e, 0x00050a2e, 0x00050a4e, 0x00040a6e, 0x00040a7e, 0x00030a8e, 0x00030a96,
        0x00030a9e, 0x00030aa6, 0x00030aae, 0x00020ab6, 0x00030aba, 0x00030ac2, 0x00020aca, 0x00010ace,
        0x00020ad0, 0x00020ad4, 0x00020ad8, 0x00010adc, 0x00020ade, 0x00020ae2, 0x00020ae6, 0x00020aea,
        0x00020aee, 0x00020af2, 0x00020af6, 0x00000000, 0x800a001a, 0x00010afa, 0x00010afc, 0x00000000,
        0x800a0029, 0x800a0092, 0x00010afe, 0x800a0019, 0x800a0091, 0x00010b00, 0x00050b02, 0x00010b22,
        0x00010b24, 0x800a0082, 0x00010b26, 0x800a0018, 0x800a0081, 0x800a0080, 0x00010b28, 0x800a0037,
        0x800a0073, 0x00010b2a, 0x800a0027, 0x800a0072, 0x00010b2c, 0x800a0007, 0x80090017, 0x80090017,
        0x80090071, 0x80090071, 0x800a0070, 0x800a0036, 0x800a0063, 0x800a0045, 0x800a0054, 0x800a0026,
        0x80090062, 0x80090062, 0x80090016, 0x80090016, 0x80090061, 0x80090061, 0x800a0006, 0x800a0060,
        0x80090053, 0x80090053, 0x800a0035, 0x800a0044, 0x80090025, 0x80090025, 0x80090052, 0x80090052,
        0x80080051, 0x80080051, 0x80080051, 0x80080051, 0x80090015, 0x80090015, 0x80090005, 0x80090005,
        0x80090034, 0x80090034, 0x80090043, 0x80090043, 0x00010b2e, 0x00000000, 0x80090024, 0x80090024,
        0x80090042, 0x80090042, 0x80090033, 0x80090033, 0x80080014, 0x80080014, 0x80080014, 0x80080014,
        0x80080041, 0x80080041, 0x80080041, 0x80080041, 0x80090004, 0x80090004, 0x80090040, 0x80090040,
        0x80080023, 0x80080023, 0x80080023, 0x80080023, 0x80080032, 0x80080032, 0x80080032, 0x80080032,
        0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013, 0x80070013,
        0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031, 0x80070031,
        0x80080003, 0x80080003, 0x80080003, 0x80080003, 0x80080030, 0x80080030, 0x80080030, 0x80080030,
        0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022, 0x80070022,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012, 0x80060012,
        0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021, 0x80060021,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002, 0x80060002,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020, 0x80060020,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011, 0x80040011,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010, 0x80030010,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800700f5, 0x800700f5, 0x800700f5, 0x800700f5,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x80090094, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80070050, 0x80070050, 0x80070050, 0x80070050, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4,
        0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4, 0x800500f4,
        0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3,
        0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3, 0x800500f3,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80090088, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff,
        0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff,
        0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff,
        0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff, 0x800200ff,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800700a5, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f, 0x8003002f,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f, 0x8002001f,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800900bc, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x8009009d, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800700b6, 0x800700b6, 0x800700b6, 0x800700b6, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800100ef, 0x800100df, 0x800100cf, 0x800100bf, 0x800100af, 0x8001009f, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x8002003f, 0x8002003f, 0x00000000, 0x800300fb, 0x800400d1, 0x800400d1,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500b5, 0x00000000, 0x800500a7, 0x00000000,
        0x80050099, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800400b4, 0x800400b4,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800300b1, 0x800300b1, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800400b0, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x80040096, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80040086, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800600dd, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800600da, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500be, 0x800500be,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800600cc, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500bb, 0x800500bb,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500c8, 0x800500c8,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500ba, 0x800500ba,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x800400c6, 0x800400c6, 0x00000000, 0x00000000, 0x800500b9, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x8005009c, 0x00000000, 0x00000000, 0x800400d3, 0x800400d3,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800500a9, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x8005009b, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x800300d2, 0x800300d2, 0x00000000, 0x00000000, 0x800400c4, 0x00000000,
        0x00000000, 0x00000000, 0x800300c3, 0x800300c3, 0x800400a8, 0x00000000, 0x800100fe, 0x800100fd,
        0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc,
        0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc, 0x800100fc,
        0x800300b2, 0x800300b2, 0x800300b2, 0x800300b2, 0x8005007e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x8005007d, 0x8004005e, 0x8004005e, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800100fa, 0x00000000, 0x00000000, 0x80020067, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80020058, 0x00000000, 0x80020076, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x80020075, 0x80020075,
        0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075,
        0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x80020075, 0x800400e8, 0x800400e8,
        0x800400e8, 0x800400e8, 0x800600ed, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500ec, 0x800500ec,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800400e7, 0x800400e7,
        0x800400e7, 0x800400e7, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800500eb, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800400e6, 0x800400e6,
        0x00000000, 0x00000000, 0x800500ea, 0x00000000, 0x00000000, 0x00000000, 0x800300e4, 0x800300e4,
        0x800300e4, 0x800300e4, 0x800400e5, 0x800400e5, 0x800500e9, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x800400d9, 0x800400d9, 0x00000000, 0x00000000, 0x800500de, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800300e3, 0x800300e3,
        0x800300e3, 0x800300e3, 0x800400cb, 0x800400cb, 0x00000000, 0x00000000, 0x800400d8, 0x800400d8,
        0x00000000, 0x00000000, 0x800500dc, 0x00000000, 0x00000000, 0x00000000, 0x800300d6, 0x800300d6,
        0x800300d6, 0x800300d6, 0x00000000, 0x00000000, 0x800500db, 0x00000000, 0x800400ca, 0x800400ca,
        0x00000000, 0x00000000, 0x800400d7, 0x800400d7, 0x800500ce, 0x00000000, 0x800300e2, 0x800300e2,
        0x800300e2, 0x800300e2, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500cd, 0x00000000,
        0x00000000, 0x00000000, 0x800400c9, 0x800400c9, 0x00000000, 0x00000000, 0x800300d5, 0x800300d5,
        0x800300d5, 0x800300d5, 0x00000000, 0x00000000, 0x800500bd, 0x00000000, 0x800300c7, 0x800300c7,
        0x800300c7, 0x800300c7, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800300e1, 0x800300e1,
        0x800300e1, 0x800300e1, 0x00000000, 0x00000000, 0x800500ad, 0x00000000, 0x800400ae, 0x800400ae,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800300d4, 0x800300d4,
        0x800300d4, 0x800300d4, 0x800500ac, 0x00000000, 0x00000000, 0x00000000, 0x800400ab, 0x00000000,
        0x8004009e, 0x00000000, 0x00000000, 0x8004008e, 0x00000000, 0x00000000, 0x800300e0, 0x800300e0,
        0x800400aa, 0x8004006e, 0x800300b8, 0x800300b8, 0x00000000, 0x00000000, 0x00000000, 0x8004008d,
        0x00000000, 0x00000000, 0x8003004e, 0x8003004e, 0x00000000, 0x00000000, 0x800300c5, 0x800300c5,
        0x8003003e, 0x8003003e, 0x8003006d, 0x8003006d, 0x00000000, 0x8004008c, 0x800300b7, 0x00000000,
        0x00000000, 0x00000000, 0x8003007b, 0x00000000, 0x800300d0, 0x00000000, 0x8003000e, 0x00000000,
        0x8003005d, 0x00000000, 0x8003007c, 0x00000000, 0x8003004d, 0x00000000, 0x8003009a, 0x8003006c,
        0x00000000, 0x8003003d, 0x8003005c, 0x00000000, 0x8002000d, 0x8002000d, 0x800200c2, 0x800200c2,
        0x8003008b, 0x8003004c, 0x8003008a, 0x8003007a, 0x8002003c, 0x8002003c, 0x8003005b, 0x00000000,
        0x8002001c, 0x8002001c, 0x800200a6, 0x800200a6, 0x80030098, 0x80030079, 0x800200c1, 0x00000000,
        0x8002002e, 0x8002001e, 0x00000000, 0x00000000, 0x8002002d, 0x8002002d, 0x800200b3, 0x800200b3,
        0x80030089, 0x00000000, 0x8002003b, 0x8002003b, 0x80030097, 0x00000000, 0x8001001d, 0x8001001d,
        0x8001001d, 0x8001001d, 0x800200c0, 0x8002006b, 0x00000000, 0x00000000, 0x8001002c, 0x00000000,
        0x800200a4, 0x8002000c, 0x8002004b, 0x00000000, 0x8002006a, 0x00000000, 0x800200a3, 0x00000000,
        0x8002005a, 0x00000000, 0x8001002b, 0x8001002b, 0x800100a2, 0x8001001b, 0x800100a1, 0x800100a1,
        0x8002000b, 0x00000000, 0x80020069, 0x80020087, 0x8002004a, 0x00000000, 0x80020078, 0x00000000,
        0x00000000, 0x00000000, 0x8002003a, 0x80020059, 0x8001002a, 0x8001002a, 0x80020095, 0x80020068,
        0x00000000, 0x00000000, 0x00000000, 0x80020077, 0x800100a0, 0x800100a0, 0x80020049, 0x00000000,
        0x80020085, 0x00000000, 0x8001000a, 0x00000000, 0x80010039, 0x80010093, 0x00000000, 0x80010009,
        0x80010090, 0x80010048, 0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084,
        0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084, 0x80010084,
        0x80010084, 0x80010084, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800500ee, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x80010038, 0x80010083, 0x80010066, 0x80010028, 0x80010047, 0x80010074,
        0x80010008, 0x80010056, 0x80010065, 0x80010046, 0x80010064, 0x80010055, 0x00000000, 0x80010057,
    ],
};

/// Huffman codebook for pair table 24.
#[rustfmt::skip]
pub const HUFFMAN_TABLE_24: Codebook = Codebook {
    init_bits: 9,
    data: &[
        0x00030200, 0x800900fe, 0x00010208, 0x0001020a, 0x0005020c, 0x0001022c, 0x00000000, 0x800900fb,
        0x0001022e, 0x00020230, 0x8009006f, 0x800900f6, 0x800800f9, 0x800800f9, 0x800800f8, 0x800800f8,
        0x8009003f, 0x800900f3, 0x800800f7, 0x800800f7, 0x800900f1, 0x00010234, 0x00040236, 0x00040246,
        0x8008005f, 0x8008005f, 0x800800f5, 0x800800f5, 0x8008004f, 0x8008004f, 0x800800f4, 0x800800f4,
        0x00040256, 0x00040266, 0x00030276, 0x0003027e, 0x00030286, 0x0003028e, 0x00030296, 0x0003029e,
        0x000302a6, 0x000302ae, 0x000302b6, 0x000302be, 0x000302c6, 0x000202ce, 0x000202d2, 0x000202d6,
        0x000202da, 0x000202de, 0x000202e2, 0x000202e6, 0x000202ea, 0x000202ee, 0x000202f2, 0x000202f6,
        0x000102fa, 0x000102fc, 0x000102fe, 0x00010300, 0x00010302, 0x00010304, 0x00010306, 0x00010308,
        0x0004030a, 0x0001031a, 0x80090051, 0x0001031c, 0x80090024, 0x80090042, 0x80090033, 0x80090014,
        0x80090041, 0x00000000, 0x80090023, 0x80090032, 0x00000000, 0x0003031e, 0x80080031, 0x80080031,
        0x00000000, 0x00030326, 0x00000000, 0x0003032e, 0x80070012, 0x80070012, 0x80070012, 0x80070012,
        0x80070021, 0x80070021, 0x80070021, 0x80070021, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80060011, 0x80060011, 0x80060011, 0x80060011, 0x80060011, 0x80060011, 0x80060011, 0x80060011,
        0x00000000, 0x00000000, 0x00020336, 0x00000000, 0x0002033a, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0001033e, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00010340, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x80090004, 0x80090040, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x800600f2, 0x800600f2, 0x800600f2, 0x800600f2, 0x800600f2, 0x800600f2, 0x800600f2, 0x800600f2,
        0x80080003, 0x80080003, 0x80080030, 0x80080030, 0x80070022, 0x80070022, 0x80070022, 0x80070022,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80070002, 0x80070002, 0x80070002, 0x80070002, 0x80070020, 0x80070020, 0x80070020, 0x80070020,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001,
        0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001, 0x80050001,
        0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010,
        0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010, 0x80050010,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000, 0x80040000,
        0x00000000, 0x00000000, 0x00000000, 0x800300fd, 0x00000000, 0x800300fc, 0x800200ff, 0x800200ff,
        0x800100fa, 0x800100ef, 0x800100df, 0x800100cf, 0x00000000, 0x80050052, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf,
        0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf,
        0x800100bf, 0x800100bf, 0x800100bf, 0x800100bf, 0x800100af, 0x8001009f, 0x8001008f, 0x8001007f,
        0x8001002f, 0x8001002f, 0x80020013, 0x00000000, 0x8001001f, 0x800100f0, 0x8002000f, 0x8002000f,
        0x8002000f, 0x8002000f, 0x800400ee, 0x800400de, 0x800400ed, 0x800400ce, 0x800400ec, 0x800400dd,
        0x800400be, 0x800400eb, 0x800400cd, 0x800400dc, 0x800400ae, 0x800400ea, 0x800400bd, 0x800400db,
        0x800400cc, 0x8004009e, 0x800400e9, 0x800400ad, 0x800400da, 0x800400bc, 0x800400cb, 0x8004008e,
        0x800400e8, 0x8004009d, 0x800400d9, 0x8004007e, 0x800400e7, 0x800400ac, 0x800400ca, 0x800400bb,
        0x8004008d, 0x800400d8, 0x00000000, 0x00000000, 0x800300e6, 0x800300e6, 0x8004006e, 0x8004009c,
        0x800300c9, 0x800300c9, 0x8003005e, 0x8003005e, 0x800300ba, 0x800300ba, 0x800300e5, 0x800300e5,
        0x800400ab, 0x8004007d, 0x800300d7, 0x800300d7, 0x800300e4, 0x800300e4, 0x8003008c, 0x8003008c,
        0x800300c8, 0x800300c8, 0x8004004e, 0x8004002e, 0x8003003e, 0x8003003e, 0x8003006d, 0x800300d6,
        0x800300e3, 0x8003009b, 0x800300b9, 0x800300aa, 0x800300e2, 0x8003001e, 0x800300e1, 0x8003005d,
        0x800300d5, 0x8003007c, 0x800300c7, 0x8003004d, 0x8003008b, 0x800300b8, 0x800300d4, 0x8003009a,
        0x800300a9, 0x8003006c, 0x800300c6, 0x8003003d, 0x800300d3, 0x8003002d, 0x800300d2, 0x8003001d,
        0x8003007b, 0x800300b7, 0x800300d1, 0x8003005c, 0x800300c5, 0x8003008a, 0x800300a8, 0x80030099,
        0x8003004c, 0x800300c4, 0x8003006b, 0x800300b6, 0x00000000, 0x8003003c, 0x800300c3, 0x8003007a,
        0x800300a7, 0x8003002c, 0x800300c2, 0x8003005b, 0x800300b5, 0x8003001c, 0x80030089, 0x80030098,
        0x800300c1, 0x8003004b, 0x00000000, 0x8003003b, 0x00000000, 0x8003001a, 0x800200b4, 0x800200b4,
        0x8003006a, 0x800300a6, 0x80030079, 0x80030097, 0x00000000, 0x80030090, 0x800200b3, 0x800200b3,
        0x80020088, 0x80020088, 0x8003002b, 0x8003005a, 0x800200b2, 0x800200b2, 0x800300a5, 0x8003001b,
        0x800300b1, 0x80030069, 0x80020096, 0x80020096, 0x800200a4, 0x800200a4, 0x8003004a, 0x80030078,
        0x80020087, 0x80020087, 0x8002003a, 0x8002003a, 0x800200a3, 0x800200a3, 0x80020059, 0x80020095,
        0x8002002a, 0x800200a2, 0x800200a1, 0x80020068, 0x80020086, 0x80020077, 0x80020049, 0x80020094,
        0x80020039, 0x80020093, 0x80020058, 0x80020085, 0x80020029, 0x80020067, 0x80020076, 0x80020092,
        0x80020019, 0x80020091, 0x80020048, 0x80020084, 0x80020057, 0x80020075, 0x80020038, 0x80020083,
        0x80020066, 0x80020028, 0x80020082, 0x80020018, 0x80020047, 0x80020074, 0x80020081, 0x00000000,
        0x80020056, 0x80020065, 0x80020017, 0x00000000, 0x80010073, 0x80010073, 0x80020037, 0x80020027,
        0x80010072, 0x80010072, 0x80010046, 0x80010064, 0x80010055, 0x80010071, 0x80010036, 0x80010063,
        0x80010045, 0x80010054, 0x80010026, 0x80010062, 0x80010016, 0x80010061, 0x00000000, 0x80010035,
        0x80010053, 0x80010044, 0x80010025, 0x80010025, 0x80010025, 0x80010025, 0x80010025, 0x80010025,
        0x80010025, 0x80010025, 0x8004000e, 0x800400e0, 0x8003000d, 0x8003000d, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x80010015, 0x00000000, 0x80010034, 0x80010043, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x800300d0, 0x8003000c, 0x00000000, 0x00000000, 0x800300c0, 0x8003000b,
        0x00000000, 0x00000000, 0x800300b0, 0x8003000a, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x800300a0, 0x80030009, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x80020008, 0x80020080, 0x00000000, 0x00000000, 0x80020007, 0x80020070, 0x80010006, 0x80010060,
        0x80010005, 0x80010050,
    ],
};

/// Huffman codebook for count1 quad table A.
#[rustfmt::skip]
pub const QUAD_TABLE_A: Codebook = Codebook {
    init_bits: 6,
    data: &[
        0x8006000b, 0x8006000f, 0x8006000d, 0x8006000e, 0x80060007, 0x80060005, 0x80050009, 0x80050009,
        0x80050006, 0x80050006, 0x80050003, 0x80050003, 0x8005000a, 0x8005000a, 0x8005000c, 0x8005000c,
        0x80040002, 0x80040002, 0x80040002, 0x80040002, 0x80040001, 0x80040001, 0x80040001, 0x80040001,
        0x80040004, 0x80040004, 0x80040004, 0x80040004, 0x80040008, 0x80040008, 0x80040008, 0x80040008,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
        0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000, 0x80010000,
    ],
};

/// Huffman codebook for count1 quad table B (4-bit complement code).
#[rustfmt::skip]
pub const QUAD_TABLE_B: Codebook = Codebook {
    init_bits: 4,
    data: &[
        0x8004000f, 0x8004000e, 0x8004000d, 0x8004000c, 0x8004000b, 0x8004000a, 0x80040009, 0x80040008,
        0x80040007, 0x80040006, 0x80040005, 0x80040004, 0x80040003, 0x80040002, 0x80040001, 0x80040000,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks a packed codebook and returns the fraction of the code space its
    /// leaves cover, validating entry structure along the way.
    fn code_space(codebook: &Codebook) -> f64 {
        let root_len = 1usize << codebook.init_bits;
        assert!(codebook.data.len() >= root_len);

        let mut sum = 0.0;
        let mut i = 0;

        while i < root_len {
            let entry = codebook.data[i];

            if entry == 0 {
                i += 1;
            }
            else if entry & 0x8000_0000 != 0 {
                let len = (entry >> 16) & 0x1f;
                assert!(len >= 1 && len <= codebook.init_bits);
                // A leaf of length len occupies an aligned run of entries.
                let run = 1usize << (codebook.init_bits - len);
                assert_eq!(i % run, 0, "misaligned leaf run");
                for j in 0..run {
                    assert_eq!(codebook.data[i + j], entry, "torn leaf run");
                }
                sum += (-(len as f64)).exp2();
                i += run;
            }
            else {
                let sub_bits = (entry >> 16) & 0x1f;
                let offset = (entry & 0xffff) as usize;
                assert!(sub_bits >= 1);
                assert!(offset + (1 << sub_bits) <= codebook.data.len());

                let sub_len = 1usize << sub_bits;
                let mut j = 0;
                while j < sub_len {
                    let sub = codebook.data[offset + j];
                    if sub == 0 {
                        j += 1;
                        continue;
                    }
                    assert!(sub & 0x8000_0000 != 0, "nested jump");
                    let len = (sub >> 16) & 0x1f;
                    assert!(len >= 1 && len <= sub_bits);
                    let run = 1usize << (sub_bits - len);
                    assert_eq!(j % run, 0, "misaligned sub leaf run");
                    sum += (-((codebook.init_bits + len) as f64)).exp2();
                    j += run;
                }
                i += 1;
            }
        }

        sum
    }

    #[test]
    fn verify_codebook_structure() {
        let books = [
            &HUFFMAN_TABLE_1,
            &HUFFMAN_TABLE_2,
            &HUFFMAN_TABLE_3,
            &HUFFMAN_TABLE_5,
            &HUFFMAN_TABLE_6,
            &HUFFMAN_TABLE_7,
            &HUFFMAN_TABLE_8,
            &HUFFMAN_TABLE_9,
            &HUFFMAN_TABLE_10,
            &HUFFMAN_TABLE_11,
            &HUFFMAN_TABLE_12,
            &HUFFMAN_TABLE_13,
            &HUFFMAN_TABLE_15,
            &HUFFMAN_TABLE_16,
            &HUFFMAN_TABLE_24,
            &QUAD_TABLE_A,
            &QUAD_TABLE_B,
        ];

        for book in books {
            let space = code_space(book);
            // A prefix code never covers more than the whole code space; the
            // escape tables cover less since they contain invalid codewords.
            assert!(space <= 1.0 + 1e-9, "code space {} > 1", space);
        }

        // The non-escape codebooks are complete.
        assert!((code_space(&HUFFMAN_TABLE_1) - 1.0).abs() < 1e-9);
        assert!((code_space(&HUFFMAN_TABLE_13) - 1.0).abs() < 1e-9);
        assert!((code_space(&QUAD_TABLE_A) - 1.0).abs() < 1e-9);
        assert!((code_space(&QUAD_TABLE_B) - 1.0).abs() < 1e-9);
    }
}
