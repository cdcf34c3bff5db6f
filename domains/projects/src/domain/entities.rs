//! Domain entities for the Projects domain
//!
//! Project records are owned by the external document store; this crate
//! only reads them. The rendered collection is always sorted ascending
//! by `order`, and `id` is the stable render-list key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Document id, unique and stable
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub url: String,
    /// Ordered list of technology tags
    pub tech: Vec<String>,
    /// Sort key; missing values default to 0
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sort the collection ascending by `order`
///
/// The sort is stable, so records sharing an `order` value keep their
/// store order.
pub fn sort_by_order(projects: &mut [Project]) {
    projects.sort_by_key(|p| p.order);
}
