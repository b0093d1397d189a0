// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-text sanitization applied once, at intake.
//!
//! Markup-significant characters are escaped and the result truncated
//! before anything is persisted or re-emitted into a notification
//! message. Downstream consumers never re-sanitize, so stored text is
//! never double-escaped.

use crate::types::{Banner, Hero, OrderDraft, Product};

/// Maximum length of any sanitized free-text field.
pub const MAX_TEXT_LEN: usize = 1000;

/// Escapes markup-significant characters and truncates to [`MAX_TEXT_LEN`].
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    if out.chars().count() > MAX_TEXT_LEN {
        out = out.chars().take(MAX_TEXT_LEN).collect();
    }
    out
}

/// Sanitizes every free-text field of an order draft.
pub fn sanitize_draft(draft: OrderDraft) -> OrderDraft {
    OrderDraft {
        name: sanitize_text(&draft.name),
        phone: sanitize_text(&draft.phone),
        address: sanitize_text(&draft.address),
        comment: sanitize_text(&draft.comment),
        items: draft
            .items
            .into_iter()
            .map(|mut item| {
                item.name = sanitize_text(&item.name);
                item
            })
            .collect(),
        ..draft
    }
}

/// Sanitizes admin-submitted product text fields.
pub fn sanitize_products(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .map(|mut p| {
            p.name = sanitize_text(&p.name);
            p.description = sanitize_text(&p.description);
            p.category = sanitize_text(&p.category);
            p
        })
        .collect()
}

/// Sanitizes admin-submitted banner text fields.
pub fn sanitize_banners(banners: Vec<Banner>) -> Vec<Banner> {
    banners
        .into_iter()
        .map(|mut b| {
            b.title = sanitize_text(&b.title);
            b.subtitle = sanitize_text(&b.subtitle);
            b
        })
        .collect()
}

/// Sanitizes hero block text fields.
pub fn sanitize_hero(mut hero: Hero) -> Hero {
    hero.title = sanitize_text(&hero.title);
    hero.subtitle = sanitize_text(&hero.subtitle);
    hero
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderItem;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            sanitize_text("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt;"
        );
        assert_eq!(sanitize_text(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn plain_uzbek_text_untouched() {
        assert_eq!(sanitize_text("Chilonzor, 10-uy"), "Chilonzor, 10-uy");
    }

    #[test]
    fn truncates_to_limit() {
        let long = "a".repeat(2000);
        assert_eq!(sanitize_text(&long).chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn sanitizes_item_names_in_draft() {
        let draft = OrderDraft {
            name: "<b>Ali</b>".into(),
            phone: "+998901234567".into(),
            address: "Chilonzor".into(),
            delivery_time: "asap".into(),
            comment: "tez bo'lsin".into(),
            items: vec![OrderItem {
                name: "<Pitsa>".into(),
                price: 25000.0,
                quantity: 2,
            }],
            total: 50000.0,
            telegram_user_id: None,
        };
        let clean = sanitize_draft(draft);
        assert_eq!(clean.name, "&lt;b&gt;Ali&lt;&#x2F;b&gt;");
        assert_eq!(clean.items[0].name, "&lt;Pitsa&gt;");
        assert_eq!(clean.comment, "tez bo&#x27;lsin");
        // Non-text fields pass through.
        assert_eq!(clean.total, 50000.0);
        assert_eq!(clean.delivery_time, "asap");
    }
}
