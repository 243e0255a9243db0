//! Domain layer: identifiers, persisted rows, and the aggregated group
//! document.
//!
//! The read path is `records` (what the store returns) → `weights`
//! normalization → `group_view` (what clients receive). Nothing in this
//! module touches storage or HTTP.

pub mod entity_id;
pub mod group_view;
pub mod records;
pub mod weights;

pub use entity_id::EntityId;
pub use group_view::{ExpenseView, GroupView, MemberView};
pub use weights::StoredWeights;
