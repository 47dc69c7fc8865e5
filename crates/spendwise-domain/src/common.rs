//! Shared traits implemented by the records the engine consumes.

use uuid::Uuid;

/// Exposes a stable identifier for stored records.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of every item in the iterator.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| item.amount()).sum()
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use uuid;
