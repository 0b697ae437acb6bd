use crate::error::{DomainError, Violation};

/// Offset/limit window over the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Page {
    pub const DEFAULT_SKIP: u64 = 0;
    pub const DEFAULT_LIMIT: u64 = 100;

    /// Build a window from raw (possibly negative) query values.
    ///
    /// Missing values take the defaults; negative values are rejected rather than clamped.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, DomainError> {
        let mut violations = Vec::new();
        let skip = non_negative("skip", skip, Self::DEFAULT_SKIP, &mut violations);
        let limit = non_negative("limit", limit, Self::DEFAULT_LIMIT, &mut violations);
        DomainError::check(violations)?;
        Ok(Self { skip, limit })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: Self::DEFAULT_SKIP,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn non_negative(
    field: &'static str,
    value: Option<i64>,
    default: u64,
    violations: &mut Vec<Violation>,
) -> u64 {
    match value {
        None => default,
        Some(v) => u64::try_from(v).unwrap_or_else(|_| {
            violations.push(Violation::new(
                field,
                "greater_than_equal",
                "Input should be greater than or equal to 0",
            ));
            default
        }),
    }
}
