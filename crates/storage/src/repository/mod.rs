pub mod all_star;
pub mod draw;
pub mod match_day;
pub mod participation;

/// Result of a per-cycle submission: the stored record and whether it was
/// created or replaced an earlier one.
#[derive(Debug, Clone)]
pub struct Upserted<T> {
    pub record: T,
    pub inserted: bool,
}

impl<T> Upserted<T> {
    pub fn inserted(record: T) -> Self {
        Self {
            record,
            inserted: true,
        }
    }

    pub fn replaced(record: T) -> Self {
        Self {
            record,
            inserted: false,
        }
    }
}
