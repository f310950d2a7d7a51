// 模块说明：本文件实现 KZG 组件（src/transcript.rs）。

//

use dusk_bls12_381::BlsScalar;
use dusk_bytes::Serializable;
use sha2::{Digest, Sha256};

use crate::commitment::Commitment;

const DOMAIN_SEPARATOR: &[u8] = b"KZG-FS-v1";

// Derives the Fiat-Shamir evaluation point bound to the three commitments
// and the degree bound of the key that produced them. The digest is taken
// over the canonical affine encodings and wide-reduced into the scalar
// field.
pub fn challenge_point(
    max_degree: u64,
    commit_a: &Commitment,
    commit_b: &Commitment,
    commit_c: &Commitment,
) -> BlsScalar {
    let mut hasher = Sha256::new();

    hasher.update(DOMAIN_SEPARATOR);
    hasher.update(max_degree.to_be_bytes());
    hasher.update(commit_a.to_bytes());
    hasher.update(commit_b.to_bytes());
    hasher.update(commit_c.to_bytes());

    let digest = hasher.finalize();

    let mut wide_bytes = [0x00u8; 64];
    wide_bytes[..32].copy_from_slice(&digest);

    BlsScalar::from_bytes_wide(&wide_bytes)
}
