use crate::common::ShareId;
use ark_std::fmt;
use sigma_nizk::NizkError;
use threshold_utils::{encryption::EncryptionError, group::GroupError, poly::PolyError};

#[derive(Debug)]
pub enum SSError {
    /// Number of shares must be at least 1
    NoShares,
    /// Threshold must be at least 1
    ZeroThreshold,
    /// Threshold and number of shares
    ThresholdExceedsShares(ShareId, ShareId),
    /// Number of shares is not below the group order
    TooManyShares(ShareId),
    /// Number of predefined points and threshold
    TooManyPredefinedPoints(usize, ShareId),
    /// Position of the predefined point with `x = 0`
    PredefinedPointAtZero(usize),
    /// Positions of 2 predefined points with the same `x`
    DuplicatePredefinedPoint(usize, usize),
    InvalidSecret(GroupError),
    /// Share ids are in `[1, n]`
    InvalidShareId(ShareId),
    /// An index appears twice in a qualified set
    DuplicateIndex(ShareId),
    InvalidShare(ShareId),
    MissingBinding(ShareId),
    InvalidSchnorrPacket(ShareId),
    InvalidPartialDecryptor(ShareId),
    /// Number of shares and required threshold
    InsufficientShares(usize, ShareId),
    NoNonceForIndex(ShareId),
    NoPublicShareWithIndex(ShareId),
    Group(GroupError),
    Poly(PolyError),
    Nizk(NizkError),
    Encryption(EncryptionError),
}

/// Coarse classification of `SSError`s so callers can decide how to react without matching every variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Parameters out of range. Fatal at the call that introduced them.
    Parameter,
    /// Bytes that don't decode to a scalar or group element
    Encoding,
    /// A share, packet or decryptor that failed verification. The only kind that blame mode recovers from.
    InvalidContribution,
    /// Fewer contributions than an explicitly requested threshold
    InsufficientQuorum,
    /// A nonce or public share needed to check a contribution is missing
    MissingCorrelatedData,
    /// Failure in a lower layer, i.e. the proof system or the encryption scheme
    Protocol,
}

impl SSError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoShares
            | Self::ZeroThreshold
            | Self::ThresholdExceedsShares(..)
            | Self::TooManyShares(_)
            | Self::TooManyPredefinedPoints(..)
            | Self::PredefinedPointAtZero(_)
            | Self::DuplicatePredefinedPoint(..)
            | Self::InvalidShareId(_)
            | Self::DuplicateIndex(_)
            | Self::Poly(_) => ErrorKind::Parameter,
            Self::InvalidSecret(_) | Self::Group(_) => ErrorKind::Encoding,
            Self::InvalidShare(_)
            | Self::MissingBinding(_)
            | Self::InvalidSchnorrPacket(_)
            | Self::InvalidPartialDecryptor(_) => ErrorKind::InvalidContribution,
            Self::InsufficientShares(..) => ErrorKind::InsufficientQuorum,
            Self::NoNonceForIndex(_) | Self::NoPublicShareWithIndex(_) => {
                ErrorKind::MissingCorrelatedData
            }
            Self::Nizk(_) | Self::Encryption(_) => ErrorKind::Protocol,
        }
    }

    /// Index of the contribution the error is about, if any
    pub fn index(&self) -> Option<ShareId> {
        match self {
            Self::InvalidShareId(i)
            | Self::DuplicateIndex(i)
            | Self::InvalidShare(i)
            | Self::MissingBinding(i)
            | Self::InvalidSchnorrPacket(i)
            | Self::InvalidPartialDecryptor(i)
            | Self::NoNonceForIndex(i)
            | Self::NoPublicShareWithIndex(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<GroupError> for SSError {
    fn from(e: GroupError) -> Self {
        Self::Group(e)
    }
}

impl From<PolyError> for SSError {
    fn from(e: PolyError) -> Self {
        Self::Poly(e)
    }
}

impl From<NizkError> for SSError {
    fn from(e: NizkError) -> Self {
        Self::Nizk(e)
    }
}

impl From<EncryptionError> for SSError {
    fn from(e: EncryptionError) -> Self {
        Self::Encryption(e)
    }
}

impl fmt::Display for SSError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoShares => write!(f, "number of shares must be at least 1"),
            Self::ZeroThreshold => write!(f, "threshold must be at least 1"),
            Self::ThresholdExceedsShares(t, n) => write!(
                f,
                "threshold must not exceed number of shares, {} > {}",
                t, n
            ),
            Self::TooManyShares(n) => {
                write!(f, "number of shares must be below the group order, got {}", n)
            }
            Self::TooManyPredefinedPoints(p, t) => write!(
                f,
                "number of predefined points must be below threshold, {} >= {}",
                p, t
            ),
            Self::PredefinedPointAtZero(i) => {
                write!(f, "predefined point {} has x coordinate 0", i)
            }
            Self::DuplicatePredefinedPoint(i, j) => write!(
                f,
                "predefined points {} and {} have the same x coordinate",
                i, j
            ),
            Self::InvalidSecret(e) => write!(f, "invalid secret: {}", e),
            Self::InvalidShareId(i) => write!(f, "invalid share id {}", i),
            Self::DuplicateIndex(i) => write!(f, "duplicate index {}", i),
            Self::InvalidShare(i) => write!(f, "invalid share with index {}", i),
            Self::MissingBinding(i) => write!(f, "missing binding for index {}", i),
            Self::InvalidSchnorrPacket(i) => write!(f, "invalid schnorr packet with index {}", i),
            Self::InvalidPartialDecryptor(i) => {
                write!(f, "invalid partial decryptor with index {}", i)
            }
            Self::InsufficientShares(..) => write!(f, "insufficient number of shares"),
            Self::NoNonceForIndex(i) => write!(f, "no nonce for index {}", i),
            Self::NoPublicShareWithIndex(i) => write!(f, "no public share with index {}", i),
            Self::Group(e) => write!(f, "{}", e),
            Self::Poly(e) => write!(f, "{}", e),
            Self::Nizk(e) => write!(f, "proof error: {}", e),
            Self::Encryption(e) => write!(f, "encryption error: {}", e),
        }
    }
}
