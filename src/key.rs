// 模块说明：本文件实现 KZG 组件（src/key.rs）。

//

use crate::commitment::Commitment;
use crate::error::Error;
use crate::poly::Polynomial;
use crate::witness::Witness;
use alloc::vec::Vec;
use dusk_bls12_381::{
    multiscalar_mul::msm_variable_base, BlsScalar, G1Affine, G1Projective,
    G2Affine, G2Prepared,
};
use dusk_bytes::{DeserializableSlice, Serializable};

#[cfg(feature = "rkyv-impl")]
use bytecheck::CheckBytes;
#[cfg(feature = "rkyv-impl")]
use rkyv::{
    ser::{ScratchSpace, Serializer},
    Archive, Deserialize, Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "rkyv-impl",
    derive(Archive, Deserialize, Serialize),
    archive(bound(serialize = "__S: Serializer + ScratchSpace")),
    archive_attr(derive(CheckBytes))
)]
pub struct CommitKey {
    #[cfg_attr(feature = "rkyv-impl", omit_bounds)]
    pub(crate) powers_of_g: Vec<G1Affine>,
}

impl CommitKey {
    pub fn to_raw_var_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            u64::SIZE + self.powers_of_g.len() * G1Affine::RAW_SIZE,
        );

        let len = self.powers_of_g.len() as u64;
        let len = len.to_le_bytes();
        bytes.extend_from_slice(&len);

        self.powers_of_g
            .iter()
            .for_each(|g| bytes.extend_from_slice(&g.to_raw_bytes()));

        bytes
    }

    pub unsafe fn from_slice_unchecked(bytes: &[u8]) -> Self {
        let mut len = [0u8; u64::SIZE];
        len.copy_from_slice(&bytes[..u64::SIZE]);
        let len = u64::from_le_bytes(len);

        let powers_of_g = bytes[u64::SIZE..]
            .chunks_exact(G1Affine::RAW_SIZE)
            .zip(0..len)
            .map(|(c, _)| G1Affine::from_slice_unchecked(c))
            .collect();

        Self { powers_of_g }
    }

    pub fn to_var_bytes(&self) -> Vec<u8> {
        self.powers_of_g
            .iter()
            .flat_map(|item| item.to_bytes().to_vec())
            .collect()
    }

    pub fn from_slice(bytes: &[u8]) -> Result<CommitKey, Error> {
        let powers_of_g = bytes
            .chunks(G1Affine::SIZE)
            .map(G1Affine::from_slice)
            .collect::<Result<Vec<G1Affine>, dusk_bytes::Error>>()?;

        if powers_of_g.is_empty() {
            return Err(Error::NotEnoughBytes);
        }

        Ok(CommitKey { powers_of_g })
    }

    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len() - 1
    }

    pub(crate) fn truncate(
        &self,
        truncated_degree: usize,
    ) -> Result<CommitKey, Error> {
        match truncated_degree {
            0 => Err(Error::TruncatedDegreeIsZero),

            i if i > self.max_degree() => Err(Error::TruncatedDegreeTooLarge),
            i => {
                let truncated_powers = Self {
                    powers_of_g: self.powers_of_g[..=i].to_vec(),
                };
                Ok(truncated_powers)
            }
        }
    }

    fn check_commit_degree_is_within_bounds(
        &self,
        poly_degree: usize,
    ) -> Result<(), Error> {
        match poly_degree > self.max_degree() {
            true => Err(Error::PolynomialDegreeTooLarge),
            false => Ok(()),
        }
    }

    pub fn commit(&self, polynomial: &Polynomial) -> Result<Commitment, Error> {
        self.check_commit_degree_is_within_bounds(polynomial.degree())?;

        Ok(Commitment::from(msm_variable_base(
            &self.powers_of_g,
            polynomial,
        )))
    }

    pub fn open_single(
        &self,
        polynomial: &Polynomial,
        point: &BlsScalar,
    ) -> Result<Witness, Error> {
        self.check_commit_degree_is_within_bounds(polynomial.degree())?;

        let value = polynomial.evaluate(point);

        // The quotients of p(x) / (x - z) and (p(x) - p(z)) / (x - z)
        // coincide; the constant shift only moves the discarded remainder.
        let quotient = polynomial.ruffini(*point);

        let commitment_to_witness = self.commit(&quotient)?;
        let commitment_to_evaluation =
            Commitment::from(self.powers_of_g[0] * value);

        Ok(Witness {
            point: *point,
            commitment_to_evaluation,
            commitment_to_witness,
        })
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "rkyv-impl",
    derive(Archive, Deserialize, Serialize),
    archive(bound(serialize = "__S: Sized + Serializer + ScratchSpace")),
    archive_attr(derive(CheckBytes))
)]

pub struct OpeningKey {
    #[cfg_attr(feature = "rkyv-impl", omit_bounds)]
    pub(crate) g: G1Affine,

    #[cfg_attr(feature = "rkyv-impl", omit_bounds)]
    pub(crate) h: G2Affine,

    #[cfg_attr(feature = "rkyv-impl", omit_bounds)]
    pub(crate) x_h: G2Affine,

    #[cfg_attr(feature = "rkyv-impl", omit_bounds)]
    pub(crate) prepared_h: G2Prepared,
}

impl Serializable<{ G1Affine::SIZE + G2Affine::SIZE * 2 }> for OpeningKey {
    type Error = dusk_bytes::Error;
    #[allow(unused_must_use)]
    fn to_bytes(&self) -> [u8; Self::SIZE] {
        use dusk_bytes::Write;
        let mut serialized_opening_key = [0u8; Self::SIZE];
        let mut writer = &mut serialized_opening_key[..];

        writer.write(&self.g.to_bytes());
        writer.write(&self.h.to_bytes());
        writer.write(&self.x_h.to_bytes());

        serialized_opening_key
    }

    fn from_bytes(
        serialized_opening_key: &[u8; Self::SIZE],
    ) -> Result<Self, Self::Error> {
        let mut opening_key_reader = &serialized_opening_key[..];
        let g = G1Affine::from_reader(&mut opening_key_reader)?;
        let h = G2Affine::from_reader(&mut opening_key_reader)?;
        let x_h = G2Affine::from_reader(&mut opening_key_reader)?;

        Ok(Self::new(g, h, x_h))
    }
}

impl OpeningKey {
    pub(crate) fn new(g: G1Affine, h: G2Affine, x_h: G2Affine) -> OpeningKey {
        let prepared_h = G2Prepared::from(h);
        OpeningKey {
            g,
            h,
            x_h,
            prepared_h,
        }
    }

    // Accepts iff e(C - V, h) == e(W, x_h - z * h), the opening equation
    // with the evaluation carried as the group element V.
    pub fn check(&self, commitment: &Commitment, witness: &Witness) -> bool {
        let inner_a: G1Affine = (commitment.0
            - G1Projective::from(witness.commitment_to_evaluation.0))
        .into();

        let inner_b: G2Affine = (self.x_h - (self.h * witness.point)).into();
        let prepared_inner_b = G2Prepared::from(-inner_b);

        let pairing = dusk_bls12_381::multi_miller_loop(&[
            (&inner_a, &self.prepared_h),
            (&witness.commitment_to_witness.0, &prepared_inner_b),
        ])
        .final_exponentiation();

        pairing == dusk_bls12_381::Gt::identity()
    }
}
