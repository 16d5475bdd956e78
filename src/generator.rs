use rand::{rng, Rng};

use crate::models::{OrderRequest, Side};

/// Categorical weights for the order type: 5 limit orders for every market order.
const LIMIT_WEIGHT: u32 = 5;
const MARKET_WEIGHT: u32 = 1;

/// Quantity is U(0,1) scaled by one of these, picked uniformly.
const QUANTITY_SCALES: [f64; 3] = [7.0, 13.0, 17.0];

/// Build one randomized order from the process-wide RNG.
pub fn generate_order() -> OrderRequest {
    let mut rng = rng();

    let side = if rng.random_bool(0.5) {
        Side::Buy
    } else {
        Side::Sell
    };
    let scale = QUANTITY_SCALES[rng.random_range(0..QUANTITY_SCALES.len())];
    let quantity = rng.random::<f64>() * scale;

    if rng.random_ratio(LIMIT_WEIGHT, LIMIT_WEIGHT + MARKET_WEIGHT) {
        OrderRequest::Limit {
            side,
            quantity,
            price: rng.random(),
        }
    } else {
        OrderRequest::Market { side, quantity }
    }
}
