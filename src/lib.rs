// 模块说明：本文件实现 KZG 组件（src/lib.rs）。

//

#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::match_bool)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

cfg_if::cfg_if!(
if #[cfg(feature = "alloc")] {

    #[cfg_attr(not(feature = "std"), macro_use)]
    extern crate alloc;

    mod key;
    mod poly;
    mod srs;
    mod util;

    pub use key::{CommitKey, OpeningKey};
    pub use poly::Polynomial;
    pub use srs::PublicParameters;

});

mod commitment;
mod error;
mod transcript;
mod witness;

pub use commitment::Commitment;
pub use error::Error;
pub use transcript::challenge_point;
pub use witness::Witness;

#[cfg(all(feature = "alloc", feature = "rkyv-impl"))]
pub use key::{
    ArchivedCommitKey, ArchivedOpeningKey, CommitKeyResolver,
    OpeningKeyResolver,
};
#[cfg(all(feature = "alloc", feature = "rkyv-impl"))]
pub use srs::{ArchivedPublicParameters, PublicParametersResolver};

pub mod prelude;
