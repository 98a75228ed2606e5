//! Market module: order matching and order placement

pub mod desk;
pub mod matching;
pub mod submission;
pub mod types;

pub use desk::TradeDesk;
pub use matching::{find_matching_orders, is_eligible_match};
pub use submission::{InMemoryOrderBook, OrderSubmitter};
pub use types::{Order, OrderRequest, PlacedOrder, SubmissionReceipt};
