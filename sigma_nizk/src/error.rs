use ark_serialize::SerializationError;
use ark_std::fmt;

#[derive(Debug)]
pub enum NizkError {
    /// A relation needs at least 1 equation and 1 witness
    EmptyRelation,
    /// Row index, expected and actual number of bases in that row
    UnequalRowLength(usize, usize, usize),
    /// Number of images and number of rows of bases
    UnequalNoOfImagesAndRows(usize, usize),
    /// Number of witnesses expected by the relation and number given
    UnequalNoOfWitnesses(usize, usize),
    /// Number of equations in the relation and commitments in the proof
    UnequalNoOfCommitments(usize, usize),
    /// Number of witnesses in the relation and responses in the proof
    UnequalNoOfResponses(usize, usize),
    Serialization(SerializationError),
}

impl From<SerializationError> for NizkError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

impl fmt::Display for NizkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRelation => write!(f, "relation has no equations or no witnesses"),
            Self::UnequalRowLength(row, expected, found) => write!(
                f,
                "row {} of bases has {} elements, expected {}",
                row, found, expected
            ),
            Self::UnequalNoOfImagesAndRows(images, rows) => write!(
                f,
                "relation has {} images for {} rows of bases",
                images, rows
            ),
            Self::UnequalNoOfWitnesses(expected, found) => {
                write!(f, "expected {} witnesses, found {}", expected, found)
            }
            Self::UnequalNoOfCommitments(expected, found) => write!(
                f,
                "proof has {} commitments, expected {}",
                found, expected
            ),
            Self::UnequalNoOfResponses(expected, found) => {
                write!(f, "proof has {} responses, expected {}", found, expected)
            }
            Self::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}
