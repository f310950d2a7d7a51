// 模块说明：本文件实现 KZG 组件（src/witness.rs）。

//

use crate::commitment::Commitment;
use dusk_bls12_381::{BlsScalar, G1Affine};
use dusk_bytes::{DeserializableSlice, Serializable};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Witness {
    pub(crate) point: BlsScalar,

    pub(crate) commitment_to_evaluation: Commitment,

    pub(crate) commitment_to_witness: Commitment,
}

impl Witness {
    pub fn point(&self) -> &BlsScalar {
        &self.point
    }
}

impl Serializable<{ BlsScalar::SIZE + G1Affine::SIZE * 2 }> for Witness {
    type Error = dusk_bytes::Error;

    #[allow(unused_must_use)]
    fn to_bytes(&self) -> [u8; Self::SIZE] {
        use dusk_bytes::Write;
        let mut serialized_witness = [0u8; Self::SIZE];
        let mut writer = &mut serialized_witness[..];

        writer.write(&self.point.to_bytes());
        writer.write(&self.commitment_to_evaluation.to_bytes());
        writer.write(&self.commitment_to_witness.to_bytes());

        serialized_witness
    }

    fn from_bytes(
        serialized_witness: &[u8; Self::SIZE],
    ) -> Result<Self, Self::Error> {
        let mut witness_reader = &serialized_witness[..];

        let point = BlsScalar::from_reader(&mut witness_reader)?;
        let commitment_to_evaluation =
            Commitment::from(G1Affine::from_reader(&mut witness_reader)?);
        let commitment_to_witness =
            Commitment::from(G1Affine::from_reader(&mut witness_reader)?);

        Ok(Self {
            point,
            commitment_to_evaluation,
            commitment_to_witness,
        })
    }
}
