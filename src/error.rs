// 模块说明：本文件实现 KZG 组件（src/error.rs）。


use dusk_bytes::Error as DuskBytesError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    DegreeIsZero,

    TruncatedDegreeTooLarge,

    TruncatedDegreeIsZero,

    PolynomialDegreeTooLarge,

    BytesError(DuskBytesError),

    NotEnoughBytes,
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegreeIsZero => {
                write!(f, "cannot create PublicParameters with max degree 0")
            }
            Self::TruncatedDegreeTooLarge => {
                write!(f, "cannot trim more than the maximum degree")
            }
            Self::TruncatedDegreeIsZero => write!(
                f,
                "cannot trim PublicParameters to a maximum size of zero"
            ),
            Self::PolynomialDegreeTooLarge => write!(
                f,
                "commit key is not large enough to commit to said polynomial"
            ),
            Self::BytesError(err) => write!(f, "{:?}", err),
            Self::NotEnoughBytes => write!(f, "not enough bytes left to read"),
        }
    }
}

impl From<DuskBytesError> for Error {
    fn from(bytes_err: DuskBytesError) -> Self {
        Self::BytesError(bytes_err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
