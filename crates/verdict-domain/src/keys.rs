//! Reserved metadata keys with wire-level meaning

/// Field → messages map promoted into the problem body's `errors` field
pub const VALIDATION_ERRORS: &str = "ValidationErrors";

/// Entity the failure refers to
pub const ENTITY: &str = "Entity";

/// Field the failure refers to
pub const FIELD: &str = "Field";

/// Value that was rejected
pub const ATTEMPTED_VALUE: &str = "AttemptedValue";
