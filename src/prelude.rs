// 模块说明：本文件实现 KZG 组件（src/prelude.rs）。

//

#[cfg(feature = "alloc")]
pub use crate::{
    key::{CommitKey, OpeningKey},
    poly::Polynomial,
    srs::PublicParameters,
};

pub use crate::commitment::Commitment;
pub use crate::error::Error;
pub use crate::transcript::challenge_point;
pub use crate::witness::Witness;
pub use dusk_bls12_381::BlsScalar;
