//! Domain Services
//!
//! Business logic operating on domain entities. I/O only ever happens through
//! the ports they are given.

mod aggregator;
mod difference;
mod quarantine;

pub use aggregator::{ProviderStats, ReferenceAggregator};
pub use difference::{DifferenceEngine, OrphanDetection};
pub use quarantine::{MoveFailure, MoveReport, QuarantineMover, QuarantineRecord};
