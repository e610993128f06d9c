//! Result of classifying a response.

use crate::problem::{ExtensionMembers, Problem};

/// What [`crate::ProblemParser::parse`] found in a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<R> {
    /// The response does not announce a problem details document.
    ///
    /// The response is handed back untouched; its body has not been read.
    NotApplicable(R),

    /// A problem details document was recognized.
    Problem {
        /// The schema members, with `status` taken from the response.
        problem: Problem,
        /// Every other member of the document. Empty if there were none.
        extensions: ExtensionMembers,
    },
}

impl<R> ParseOutcome<R> {
    /// Returns `true` if a problem details document was recognized.
    #[must_use]
    pub const fn is_problem(&self) -> bool {
        matches!(self, Self::Problem { .. })
    }

    /// Returns the recognized problem, if any.
    #[must_use]
    pub const fn problem(&self) -> Option<&Problem> {
        match self {
            Self::Problem { problem, .. } => Some(problem),
            Self::NotApplicable(_) => None,
        }
    }

    /// Returns the extension members of the recognized problem, if any.
    #[must_use]
    pub const fn extensions(&self) -> Option<&ExtensionMembers> {
        match self {
            Self::Problem { extensions, .. } => Some(extensions),
            Self::NotApplicable(_) => None,
        }
    }

    /// Consumes the outcome, returning the problem and its extensions.
    #[must_use]
    pub fn into_problem(self) -> Option<(Problem, ExtensionMembers)> {
        match self {
            Self::Problem {
                problem,
                extensions,
            } => Some((problem, extensions)),
            Self::NotApplicable(_) => None,
        }
    }

    /// Consumes the outcome, returning the untouched response when no problem
    /// document was present.
    #[must_use]
    pub fn into_response(self) -> Option<R> {
        match self {
            Self::NotApplicable(response) => Some(response),
            Self::Problem { .. } => None,
        }
    }
}
