//! Stable rule identifiers

/// Design rules
pub mod design {
    pub const OPEN_CLOSED_PRINCIPLE: &str = "OpenClosedPrinciple";
}

/// Complexity rules
pub mod complexity {
    pub const TOO_MANY_FUNCTIONS: &str = "TooManyFunctions";
}
