use core::fmt;

use crate::Policy;

/// An error indicating that a policy rejected the provided value
///
/// The error deliberately carries no detail about why the value was rejected,
/// nor the value itself; only the name of the rejecting policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    policy: &'static str,
}

impl ValidationFailure {
    /// Constructs the failure reported when `P` rejects a value
    #[inline]
    pub fn of<P: Policy>() -> Self {
        Self { policy: P::NAME }
    }

    /// The name of the policy that rejected the value
    #[inline]
    pub fn policy(&self) -> &'static str {
        self.policy
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "validation failure: value rejected by the {} policy",
            self.policy
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationFailure {}
