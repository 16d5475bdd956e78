use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// One synthetic order, shaped exactly like the intake API expects it on the wire.
///
/// Market orders carry no `price` key at all. The variant split (instead of an
/// `Option<f64>` field) keeps serde from ever emitting `"price": null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OrderRequest {
    Limit { side: Side, quantity: f64, price: f64 },
    Market { side: Side, quantity: f64 },
}

impl OrderRequest {
    pub fn side(&self) -> Side {
        match self {
            OrderRequest::Limit { side, .. } | OrderRequest::Market { side, .. } => *side,
        }
    }

    pub fn quantity(&self) -> f64 {
        match self {
            OrderRequest::Limit { quantity, .. } | OrderRequest::Market { quantity, .. } => {
                *quantity
            }
        }
    }
}
