//! Order submission
//!
//! `OrderSubmitter` is the seam to whatever actually records orders (a wallet
//! provider and an on-chain order book in the dashboard). `InMemoryOrderBook`
//! is the in-process implementation used by the CLI and tests.

use crate::error::{GridCommitError, Result};
use crate::types::OrderId;
use std::future::Future;
use tokio::sync::Mutex;

use super::matching::find_matching_orders;
use super::types::{Order, OrderRequest, SubmissionReceipt};

/// Accepts raw order terms and returns an acknowledgement
pub trait OrderSubmitter: Send + Sync {
    fn submit(
        &self,
        request: OrderRequest,
    ) -> impl Future<Output = Result<SubmissionReceipt>> + Send;
}

/// In-memory order book
#[derive(Debug)]
pub struct InMemoryOrderBook {
    trader: String,
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderBook {
    /// Empty book; orders submitted through it are attributed to `trader`
    pub fn new(trader: impl Into<String>) -> Self {
        Self::with_orders(trader, Vec::new())
    }

    /// Book preloaded with existing orders
    pub fn with_orders(trader: impl Into<String>, orders: Vec<Order>) -> Self {
        Self {
            trader: trader.into(),
            orders: Mutex::new(orders),
        }
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    pub async fn get(&self, id: OrderId) -> Option<Order> {
        self.orders
            .lock()
            .await
            .iter()
            .find(|order| order.id == id)
            .cloned()
    }

    /// Deactivate an order
    pub async fn cancel(&self, id: OrderId) -> Result<()> {
        let mut orders = self.orders.lock().await;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(GridCommitError::OrderNotFound(id.0))?;

        if !order.active {
            return Err(GridCommitError::Submission(format!(
                "order {} is already inactive",
                id
            )));
        }
        order.active = false;

        tracing::info!("Cancelled order {}", id);
        Ok(())
    }

    /// Eligible sell orders for a buy order
    pub async fn find_matches(&self, buy_id: OrderId) -> Vec<OrderId> {
        find_matching_orders(buy_id, &self.orders.lock().await)
    }
}

impl OrderSubmitter for InMemoryOrderBook {
    async fn submit(&self, request: OrderRequest) -> Result<SubmissionReceipt> {
        let mut orders = self.orders.lock().await;
        let next_id = orders.iter().map(|order| order.id.0).max().unwrap_or(0) + 1;
        let id = OrderId(next_id);

        orders.push(Order {
            id,
            trader: self.trader.clone(),
            kind: request.kind,
            side: request.side,
            params: request.params,
            active: true,
        });

        tracing::debug!("Recorded {} {:?} order {}", request.kind, request.side, id);

        Ok(SubmissionReceipt {
            order_id: id,
            kind: request.kind,
            side: request.side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderSide, TradeKind, TradeParameters};

    fn request(side: OrderSide, amount: u64, min: u64, max: u64) -> OrderRequest {
        OrderRequest {
            kind: TradeKind::Energy,
            side,
            params: TradeParameters::new(amount, min, max),
        }
    }

    #[tokio::test]
    async fn test_submit_assigns_sequential_ids() {
        let book = InMemoryOrderBook::new("0xalice");

        let first = book.submit(request(OrderSide::Sell, 100, 5, 10)).await.unwrap();
        let second = book.submit(request(OrderSide::Buy, 100, 5, 10)).await.unwrap();

        assert_eq!(first.order_id, OrderId(1));
        assert_eq!(second.order_id, OrderId(2));

        let stored = book.get(OrderId(1)).await.unwrap();
        assert_eq!(stored.trader, "0xalice");
        assert_eq!(stored.params, TradeParameters::new(100, 5, 10));
        assert!(stored.active);
    }

    #[tokio::test]
    async fn test_cancel() {
        let book = InMemoryOrderBook::new("0xalice");
        let receipt = book.submit(request(OrderSide::Sell, 100, 5, 10)).await.unwrap();

        book.cancel(receipt.order_id).await.unwrap();
        assert!(!book.get(receipt.order_id).await.unwrap().active);

        assert!(matches!(
            book.cancel(receipt.order_id).await,
            Err(GridCommitError::Submission(_))
        ));
        assert!(matches!(
            book.cancel(OrderId(42)).await,
            Err(GridCommitError::OrderNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_find_matches_skips_cancelled() {
        let book = InMemoryOrderBook::new("0xalice");
        let sell_a = book.submit(request(OrderSide::Sell, 100, 8, 12)).await.unwrap();
        let sell_b = book.submit(request(OrderSide::Sell, 100, 4, 9)).await.unwrap();
        let buy = book.submit(request(OrderSide::Buy, 100, 5, 10)).await.unwrap();

        assert_eq!(
            book.find_matches(buy.order_id).await,
            vec![sell_a.order_id, sell_b.order_id]
        );

        book.cancel(sell_a.order_id).await.unwrap();
        assert_eq!(book.find_matches(buy.order_id).await, vec![sell_b.order_id]);
    }

    #[tokio::test]
    async fn test_ids_continue_after_preloaded_orders() {
        let existing = Order {
            id: OrderId(7),
            trader: "0xbob".to_string(),
            kind: TradeKind::Carbon,
            side: OrderSide::Sell,
            params: TradeParameters::new(1, 1, 1),
            active: true,
        };
        let book = InMemoryOrderBook::with_orders("0xalice", vec![existing]);

        let receipt = book.submit(request(OrderSide::Buy, 1, 1, 1)).await.unwrap();
        assert_eq!(receipt.order_id, OrderId(8));
        assert_eq!(book.orders().await.len(), 2);
    }
}
