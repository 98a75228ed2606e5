//! Order matching rules
//!
//! A sell order is eligible for a buy order when both are in the same market,
//! the amounts are equal and the price ranges overlap.

use crate::types::OrderId;

use super::types::Order;

/// Check if two orders are eligible for matching
pub fn is_eligible_match(buy: &Order, sell: &Order) -> bool {
    sell.active
        && sell.is_sell()
        && sell.kind == buy.kind
        && sell.params.amount == buy.params.amount
        && buy.params.max_price >= sell.params.min_price
        && sell.params.max_price >= buy.params.min_price
}

/// Ids of every sell order eligible for `buy_id`, in book order.
///
/// Empty when the buy order is unknown, inactive or not a buy order.
pub fn find_matching_orders(buy_id: OrderId, orders: &[Order]) -> Vec<OrderId> {
    let buy = match orders.iter().find(|order| order.id == buy_id) {
        Some(order) if order.active && order.is_buy() => order,
        _ => return Vec::new(),
    };

    orders
        .iter()
        .filter(|sell| is_eligible_match(buy, sell))
        .map(|sell| sell.id)
        .collect()
}
