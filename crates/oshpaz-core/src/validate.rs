// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure structural validation for untrusted intake payloads.
//!
//! Every check here is side-effect free: a payload either passes whole
//! or the entire submission is rejected. Sanitization is a separate,
//! later step (see [`crate::sanitize`]).

use crate::error::OshpazError;
use crate::types::{Banner, OrderDraft, Product};

/// Maximum length of the customer name.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of the customer phone.
pub const MAX_PHONE_LEN: usize = 20;
/// Maximum length of the delivery address.
pub const MAX_ADDRESS_LEN: usize = 500;
/// Maximum number of line items per order.
pub const MAX_ITEMS: usize = 100;
/// Sanity ceiling for order totals and item prices (so'm).
pub const MAX_TOTAL: f64 = 100_000_000.0;
/// Maximum number of catalog products.
pub const MAX_PRODUCTS: usize = 1000;
/// Maximum number of banners.
pub const MAX_BANNERS: usize = 100;

/// Tolerance when cross-checking the client-computed total against the
/// sum recomputed from items.
const TOTAL_TOLERANCE: f64 = 0.01;

/// Validates an incoming order draft against the intake rules.
///
/// All rules must hold; the first violation fails the whole order.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), OshpazError> {
    if draft.name.is_empty() || draft.name.chars().count() > MAX_NAME_LEN {
        return Err(OshpazError::Validation(format!(
            "name must be 1..={MAX_NAME_LEN} characters"
        )));
    }
    if draft.phone.is_empty() || draft.phone.chars().count() > MAX_PHONE_LEN {
        return Err(OshpazError::Validation(format!(
            "phone must be 1..={MAX_PHONE_LEN} characters"
        )));
    }
    if draft.address.is_empty() || draft.address.chars().count() > MAX_ADDRESS_LEN {
        return Err(OshpazError::Validation(format!(
            "address must be 1..={MAX_ADDRESS_LEN} characters"
        )));
    }
    if draft.items.is_empty() || draft.items.len() > MAX_ITEMS {
        return Err(OshpazError::Validation(format!(
            "items must contain 1..={MAX_ITEMS} entries"
        )));
    }
    for item in &draft.items {
        if item.name.is_empty() {
            return Err(OshpazError::Validation("item name must not be empty".into()));
        }
        if !(0.0..=MAX_TOTAL).contains(&item.price) {
            return Err(OshpazError::Validation(
                "item price out of range".into(),
            ));
        }
        if item.quantity == 0 {
            return Err(OshpazError::Validation(
                "item quantity must be positive".into(),
            ));
        }
    }
    if !draft.total.is_finite() || !(0.0..=MAX_TOTAL).contains(&draft.total) {
        return Err(OshpazError::Validation("total out of range".into()));
    }
    Ok(())
}

/// Cross-checks the client-computed total against the sum of line totals.
///
/// The client value is not trusted; a mismatch rejects the submission.
pub fn check_total(draft: &OrderDraft) -> Result<(), OshpazError> {
    let computed: f64 = draft.items.iter().map(|i| i.line_total()).sum();
    if (computed - draft.total).abs() > TOTAL_TOLERANCE {
        return Err(OshpazError::Validation(format!(
            "total {} does not match items sum {}",
            draft.total, computed
        )));
    }
    Ok(())
}

/// Validates an admin-submitted product catalog.
pub fn validate_products(products: &[Product]) -> Result<(), OshpazError> {
    if products.len() > MAX_PRODUCTS {
        return Err(OshpazError::Validation(format!(
            "at most {MAX_PRODUCTS} products allowed"
        )));
    }
    for product in products {
        if product.id.is_empty() || product.name.is_empty() {
            return Err(OshpazError::Validation(
                "product id and name must not be empty".into(),
            ));
        }
        if !(0.0..=MAX_TOTAL).contains(&product.price) {
            return Err(OshpazError::Validation("product price out of range".into()));
        }
    }
    Ok(())
}

/// Validates an admin-submitted banner set.
pub fn validate_banners(banners: &[Banner]) -> Result<(), OshpazError> {
    if banners.len() > MAX_BANNERS {
        return Err(OshpazError::Validation(format!(
            "at most {MAX_BANNERS} banners allowed"
        )));
    }
    for banner in banners {
        if banner.id.is_empty() || banner.title.is_empty() || banner.subtitle.is_empty() {
            return Err(OshpazError::Validation(
                "banner id, title and subtitle must not be empty".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderItem;

    fn item(name: &str, price: f64, quantity: u32) -> OrderItem {
        OrderItem {
            name: name.into(),
            price,
            quantity,
        }
    }

    fn draft_with_items(items: Vec<OrderItem>) -> OrderDraft {
        let total = items.iter().map(OrderItem::line_total).sum();
        OrderDraft {
            name: "Ali".into(),
            phone: "+998901234567".into(),
            address: "Chilonzor, 10-uy, 5-xonadon".into(),
            delivery_time: "asap".into(),
            comment: String::new(),
            items,
            total,
            telegram_user_id: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        let draft = draft_with_items(vec![item("Pitsa xamiri", 25000.0, 2)]);
        assert!(validate_draft(&draft).is_ok());
        assert!(check_total(&draft).is_ok());
    }

    #[test]
    fn empty_items_rejected() {
        let draft = draft_with_items(vec![]);
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn exactly_hundred_items_accepted_hundred_one_rejected() {
        let hundred = draft_with_items(vec![item("Un", 1000.0, 1); 100]);
        assert!(validate_draft(&hundred).is_ok());

        let hundred_one = draft_with_items(vec![item("Un", 1000.0, 1); 101]);
        assert!(validate_draft(&hundred_one).is_err());
    }

    #[test]
    fn oversized_fields_rejected() {
        let mut draft = draft_with_items(vec![item("Un", 1000.0, 1)]);
        draft.name = "a".repeat(101);
        assert!(validate_draft(&draft).is_err());

        let mut draft = draft_with_items(vec![item("Un", 1000.0, 1)]);
        draft.phone = "9".repeat(21);
        assert!(validate_draft(&draft).is_err());

        let mut draft = draft_with_items(vec![item("Un", 1000.0, 1)]);
        draft.address = "a".repeat(501);
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn total_out_of_range_rejected() {
        let mut draft = draft_with_items(vec![item("Un", 1000.0, 1)]);
        draft.total = -1.0;
        assert!(validate_draft(&draft).is_err());

        let mut draft = draft_with_items(vec![item("Un", 1000.0, 1)]);
        draft.total = MAX_TOTAL + 1.0;
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn zero_quantity_rejected() {
        let draft = draft_with_items(vec![item("Un", 1000.0, 0)]);
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn mismatched_total_rejected_by_cross_check() {
        let mut draft = draft_with_items(vec![item("Pitsa xamiri", 25000.0, 2)]);
        draft.total = 49000.0;
        // Structurally fine, but the recomputed sum disagrees.
        assert!(validate_draft(&draft).is_ok());
        assert!(check_total(&draft).is_err());
    }

    #[test]
    fn banner_without_subtitle_rejected() {
        let banner = Banner {
            id: "b1".into(),
            title: "Aksiya".into(),
            subtitle: String::new(),
            rest: serde_json::Map::new(),
        };
        assert!(validate_banners(&[banner]).is_err());
    }
}
