//! Cart Groups

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::models::{CartLine, CartLineId};

/// Line ids backing one group. Most groups hold a handful of lines.
pub type CartGroupIds = SmallVec<[CartLineId; 4]>;

/// Display row for all cart lines of the same movie at the same price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartGroup {
    /// `name|image|price`.
    pub key: String,

    /// Movie name shared by the member lines.
    pub name: String,

    /// Image file name, relative to the images base URL.
    pub image: String,

    /// Unit price in whole lira.
    pub price: u64,

    /// Sum of the member lines' order amounts.
    pub total_amount: u64,

    /// Member line ids, in the order the lines were listed.
    pub cart_ids: CartGroupIds,
}

impl CartGroup {
    fn seed(key: String, line: &CartLine) -> Self {
        Self {
            key,
            name: line.name.clone(),
            image: line.image.clone(),
            price: line.price,
            total_amount: 0,
            cart_ids: SmallVec::new(),
        }
    }

    /// Price of every copy in the group.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(self.total_amount)
    }
}

/// Composite key lines are grouped by.
pub fn group_key(line: &CartLine) -> String {
    format!("{}|{}|{}", line.name, line.image, line.price)
}

/// Collapse cart lines into one group per `(name, image, price)`.
///
/// Groups are ordered by name. Groups sharing a name keep the order in which
/// their first line appeared.
pub fn group_lines(lines: &[CartLine]) -> Vec<CartGroup> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<CartGroup> = Vec::new();

    for line in lines {
        let key = group_key(line);

        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push(CartGroup::seed(key.clone(), line));
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };

        if let Some(group) = groups.get_mut(slot) {
            group.total_amount += u64::from(line.order_amount);
            group.cart_ids.push(line.cart_id);
        }
    }

    // Stable: equal names stay in first-seen order.
    groups.sort_by(|a, b| a.name.cmp(&b.name));

    groups
}

/// Sum of every group's subtotal.
pub fn cart_total(groups: &[CartGroup]) -> u64 {
    groups
        .iter()
        .fold(0, |total, group| total.saturating_add(group.subtotal()))
}
