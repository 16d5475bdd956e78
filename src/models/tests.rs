use serde_json::Value;

use crate::models::{OrderRequest, Side};

#[test]
fn limit_order_wire_shape() {
    let order = OrderRequest::Limit {
        side: Side::Sell,
        quantity: 3.5,
        price: 0.25,
    };

    let json = serde_json::to_string(&order).expect("Serialization failed");
    // Tag first, then fields in declaration order.
    assert_eq!(
        json,
        r#"{"type":"limit","side":"sell","quantity":3.5,"price":0.25}"#
    );
}

#[test]
fn market_order_wire_shape() {
    let order = OrderRequest::Market {
        side: Side::Buy,
        quantity: 5.0,
    };

    let json = serde_json::to_string(&order).expect("Serialization failed");
    assert_eq!(json, r#"{"type":"market","side":"buy","quantity":5.0}"#);
}

#[test]
fn market_order_omits_price_key_entirely() {
    let order = OrderRequest::Market {
        side: Side::Sell,
        quantity: 9.04,
    };

    let value: Value = serde_json::to_value(order).expect("Serialization failed");
    let obj = value.as_object().expect("order must serialize to an object");

    assert_eq!(obj.len(), 3);
    assert!(obj.contains_key("type"));
    assert!(obj.contains_key("side"));
    assert!(obj.contains_key("quantity"));
    assert!(!obj.contains_key("price"), "price must be absent, not null");
}

#[test]
fn limit_order_carries_exactly_four_keys() {
    let order = OrderRequest::Limit {
        side: Side::Buy,
        quantity: 3.21,
        price: 0.57,
    };

    let value: Value = serde_json::to_value(order).expect("Serialization failed");
    let obj = value.as_object().expect("order must serialize to an object");

    assert_eq!(obj.len(), 4);
    assert!(obj.contains_key("price"));
}

#[test]
fn tag_dispatches_deserialization() {
    let parsed: OrderRequest =
        serde_json::from_str(r#"{"type":"market","side":"buy","quantity":5.0}"#)
            .expect("Deserialization failed");

    assert_eq!(
        parsed,
        OrderRequest::Market {
            side: Side::Buy,
            quantity: 5.0
        }
    );
}
