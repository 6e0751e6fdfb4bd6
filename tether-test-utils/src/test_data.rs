// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canned inputs shared by the property and signal test suites.

use crate::pair::Pair;

/// Initial value of the integer properties under test.
pub const INITIAL_INT: i32 = 5;

/// Initial value of the pair properties under test.
pub const INITIAL_PAIR: Pair = Pair::new(3, 9);

#[must_use]
pub fn sample_ints() -> Vec<i32> {
    vec![17, 42, -7, 0, 194]
}

/// Pairs where the two fields change independently, including one exact repeat.
#[must_use]
pub fn sample_pairs() -> Vec<Pair> {
    vec![
        Pair::new(1, 12),
        Pair::new(1, -8),
        Pair::new(7, -8),
        Pair::new(7, -8),
        Pair::new(3, 17),
    ]
}
