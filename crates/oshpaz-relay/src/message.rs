// SPDX-FileCopyrightText: 2026 Oshpaz Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat message templates for order announcements.
//!
//! Texts are the Uzbek phrases the storefront has always used; prices
//! are grouped with spaces ("50 000 so'm"). Order text arrives here
//! already sanitized at intake and is never re-escaped.

use oshpaz_core::{Order, OrderStatus};

/// Formats a so'm amount with space-grouped thousands.
///
/// Amounts are whole so'm in practice; fractions are rounded.
pub fn format_price(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Human label for a delivery window code; unknown codes pass through.
pub fn delivery_window_label(code: &str) -> &str {
    match code {
        "asap" => "Imkon qadar tezroq",
        "morning" => "Ertalab (9:00-12:00)",
        "afternoon" => "Kunduzi (12:00-17:00)",
        "evening" => "Kechqurun (17:00-21:00)",
        other => other,
    }
}

/// Status headline shown to the customer.
pub fn status_line(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::New => "🆕 Yangi buyurtma qabul qilindi",
        OrderStatus::Processing => "⏳ Buyurtmangiz ko'rib chiqilmoqda",
        OrderStatus::Confirmed => "✅ Buyurtmangiz tasdiqlandi",
        OrderStatus::Preparing => "👨‍🍳 Buyurtmangiz tayyorlanmoqda",
        OrderStatus::Delivering => "🚚 Buyurtmangiz yetkazilmoqda",
        OrderStatus::Completed => "🎉 Buyurtmangiz yetkazib berildi!",
        OrderStatus::Cancelled => "❌ Buyurtmangiz bekor qilindi",
    }
}

/// Short order number shown in messages: the last six characters of the id.
pub fn short_order_number(id: &str) -> &str {
    let chars = id.char_indices().rev().take(6).last();
    match chars {
        Some((idx, _)) => &id[idx..],
        None => id,
    }
}

/// The admin announcement for a newly received order.
pub fn admin_announcement(order: &Order) -> String {
    let mut message = format!("🛒 YANGI BUYURTMA #{}\n\n", short_order_number(&order.id));
    message.push_str(&format!("👤 Mijoz: {}\n", order.name));
    message.push_str(&format!("📞 Telefon: {}\n", order.phone));
    message.push_str(&format!("📍 Manzil: {}\n", order.address));
    message.push_str(&format!(
        "⏰ Vaqt: {}\n\n",
        delivery_window_label(&order.delivery_time)
    ));

    message.push_str("📦 Mahsulotlar:\n");
    for item in &order.items {
        message.push_str(&format!(
            "• {} x{} - {} so'm\n",
            item.name,
            item.quantity,
            format_price(item.line_total())
        ));
    }

    message.push_str(&format!("\n💰 Jami: {} so'm\n", format_price(order.total)));

    if !order.comment.is_empty() {
        message.push_str(&format!("\n💬 Izoh: {}", order.comment));
    }

    message
}

/// The customer-facing status announcement for an order.
pub fn status_announcement(order: &Order) -> String {
    let mut message = format!("{}\n\n", status_line(order.status));
    message.push_str(&format!(
        "📦 Buyurtma raqami: #{}\n",
        short_order_number(&order.id)
    ));
    message.push_str(&format!("💰 Jami: {} so'm\n", format_price(order.total)));

    match order.status {
        OrderStatus::Delivering => {
            message.push_str("\n🚚 Yetkazib beruvchi tez orada siz bilan bog'lanadi.");
        }
        OrderStatus::Completed => {
            message.push_str(
                "\n🙏 Bizni tanlaganingiz uchun rahmat! Yana buyurtma berishingiz mumkin.",
            );
        }
        _ => {}
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use oshpaz_core::{OrderDraft, OrderItem};

    fn order_with_comment(comment: &str) -> Order {
        Order::from_draft(
            "a1b2c3d4e5f6",
            OrderDraft {
                name: "Ali".into(),
                phone: "+998901234567".into(),
                address: "Chilonzor, 10-uy".into(),
                delivery_time: "evening".into(),
                comment: comment.into(),
                items: vec![
                    OrderItem {
                        name: "Pitsa xamiri".into(),
                        price: 25000.0,
                        quantity: 2,
                    },
                    OrderItem {
                        name: "Mozzarella".into(),
                        price: 45000.0,
                        quantity: 1,
                    },
                ],
                total: 95000.0,
                telegram_user_id: Some("42".into()),
            },
            Utc::now(),
        )
    }

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(950.0), "950");
        assert_eq!(format_price(50000.0), "50 000");
        assert_eq!(format_price(1234567.0), "1 234 567");
    }

    #[test]
    fn short_number_is_last_six_chars() {
        assert_eq!(short_order_number("a1b2c3d4e5f6"), "d4e5f6");
        assert_eq!(short_order_number("abc"), "abc");
    }

    #[test]
    fn admin_announcement_contains_all_sections() {
        let text = admin_announcement(&order_with_comment("eshik oldiga qo'ying"));
        assert!(text.starts_with("🛒 YANGI BUYURTMA #d4e5f6"));
        assert!(text.contains("👤 Mijoz: Ali"));
        assert!(text.contains("⏰ Vaqt: Kechqurun (17:00-21:00)"));
        assert!(text.contains("• Pitsa xamiri x2 - 50 000 so'm"));
        assert!(text.contains("• Mozzarella x1 - 45 000 so'm"));
        assert!(text.contains("💰 Jami: 95 000 so'm"));
        assert!(text.contains("💬 Izoh: eshik oldiga qo'ying"));
    }

    #[test]
    fn admin_announcement_omits_empty_comment() {
        let text = admin_announcement(&order_with_comment(""));
        assert!(!text.contains("Izoh"));
    }

    #[test]
    fn status_announcement_for_preparing() {
        let mut order = order_with_comment("");
        order.status = OrderStatus::Preparing;
        let text = status_announcement(&order);
        assert!(text.contains("tayyorlanmoqda"));
        assert!(text.contains("#d4e5f6"));
        assert!(text.contains("95 000 so'm"));
    }

    #[test]
    fn status_announcement_extras() {
        let mut order = order_with_comment("");
        order.status = OrderStatus::Delivering;
        assert!(status_announcement(&order).contains("tez orada siz bilan bog'lanadi"));

        order.status = OrderStatus::Completed;
        assert!(status_announcement(&order).contains("rahmat"));

        order.status = OrderStatus::Cancelled;
        let text = status_announcement(&order);
        assert!(text.contains("bekor qilindi"));
        assert!(!text.contains("rahmat"));
    }
}
