//! Test curve and point multiples from GOST R 34.10-2012, appendix A.1
//! (reproduced in [RFC 7091] § 7.1).
//!
//! [RFC 7091]: https://www.rfc-editor.org/rfc/rfc7091

use crate::{CurveParams, Result};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};

/// Field characteristic `p`.
pub const P: [u8; 32] = hex!("8000000000000000000000000000000000000000000000000000000000000431");

/// Subgroup order `q`.
pub const Q: [u8; 32] = hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3");

/// Coefficient `a`.
pub const A: [u8; 32] = hex!("0000000000000000000000000000000000000000000000000000000000000007");

/// Coefficient `b`.
pub const B: [u8; 32] = hex!("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E");

/// Base point x-coordinate.
pub const X: [u8; 32] = hex!("0000000000000000000000000000000000000000000000000000000000000002");

/// Base point y-coordinate.
pub const Y: [u8; 32] = hex!("08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8");

/// Scalar multiplication test vector: `k·G = (x, y)`.
pub struct MulTestVector {
    /// Big-endian scalar
    pub k: &'static [u8],

    /// Expected x-coordinate
    pub x: [u8; 32],

    /// Expected y-coordinate
    pub y: [u8; 32],
}

/// Repeated additions of the base point: `G`, `2G`, `3G`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32]); 3] = &[
    (X, Y),
    (
        hex!("6FE27A3E0ACED6E9DB874C05A9C7395BE62E32982ED2A1BC5C92CFC195FE9768"),
        hex!("2194A807F376B7587D1C37CFC1327EAE83F6CBBEE4AFC1DAA94B6FCC19C9A1FF"),
    ),
    (
        hex!("4423BA960B9B01DBD04DFEA9FF9E7F1BA2A68DE2F295F202B4E1BF1F3E7FD129"),
        hex!("303C22710A3D0E28FBE3C5B0E4980CD303C337182233A3D7A3B6BBCD7D1AAD26"),
    ),
];

/// Published signing key `d` with its public key `Q = d·G`, and the
/// ephemeral scalar `k` of the example signature with `C = k·G`.
pub const MUL_TEST_VECTORS: &[MulTestVector; 2] = &[
    MulTestVector {
        k: &hex!("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28"),
        x: hex!("7F2B49E270DB6D90D8595BEC458B50C58585BA1D4E9B788F6689DBD8E56FD80B"),
        y: hex!("26F1B489D6701DD185C8413A977B3CBBAF64D1C593D26627DFFB101A87FF77DA"),
    },
    MulTestVector {
        k: &hex!("77105C9B20BCD3122823C8CF6FCC7B956DE33814E95B7FE64FED924594DCEAB3"),
        x: hex!("41AA28D2F1AB148280CD9ED56FEDA41974053554A42767B83AD043FD39DC0493"),
        y: hex!("489C375A9941A3049E33B34361DD204172AD98C3E5916DE27695D22A61FAE46E"),
    },
];

/// Parse a big-endian unsigned integer.
pub fn int(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Build the test curve.
pub fn test_curve() -> Result<CurveParams> {
    Ok(CurveParams::new(int(&P), int(&Q), int(&A), int(&B), int(&X), int(&Y))?
        .with_name("id-GostR3410-2001-TestParamSet"))
}
