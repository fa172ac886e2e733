//! The phone request: a memoized, single-settlement asynchronous operation.

use std::fmt;
use std::time::Duration;

use askmom_core::{DecisionError, DecisionFlag, Phone, PhoneOffer};
use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::debug;

/// What a phone request settles to.
pub type Settlement = std::result::Result<Phone, DecisionError>;

/// Handle to the answer mom gives.
///
/// The outcome is decided from the [`DecisionFlag`] when the request is
/// built. Cloning the handle or awaiting it again never re-reads the flag:
/// every observer sees the same settlement.
#[derive(Clone)]
pub struct PhoneRequest {
    mood: DecisionFlag,
    latency: Duration,
    settlement: Shared<BoxFuture<'static, Settlement>>,
}

impl PhoneRequest {
    pub fn new(offer: PhoneOffer, mood: DecisionFlag) -> Self {
        Self::with_latency(offer, mood, Duration::ZERO)
    }

    /// Build a request that takes `latency` to settle once first awaited.
    /// Latency changes when the answer arrives, never what it is.
    pub fn with_latency(offer: PhoneOffer, mood: DecisionFlag, latency: Duration) -> Self {
        let decided: Settlement = if mood.is_happy() {
            Ok(offer.phone)
        } else {
            Err(DecisionError::new(offer.refusal))
        };
        debug!(
            mood = mood.as_str(),
            latency_ms = latency.as_millis() as u64,
            granted = decided.is_ok(),
            "Phone request constructed"
        );

        let settlement = async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            decided
        }
        .boxed()
        .shared();

        Self {
            mood,
            latency,
            settlement,
        }
    }

    /// The flag this request was decided with.
    pub fn mood(&self) -> DecisionFlag {
        self.mood
    }

    /// A future resolving to the settlement. Can be awaited any number of times.
    pub fn outcome(&self) -> Shared<BoxFuture<'static, Settlement>> {
        self.settlement.clone()
    }

    /// The settlement, if some observer has already driven it to completion.
    pub fn peek(&self) -> Option<Settlement> {
        self.settlement.peek().cloned()
    }
}

impl fmt::Debug for PhoneRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneRequest")
            .field("mood", &self.mood)
            .field("latency", &self.latency)
            .field("settled", &self.peek())
            .finish()
    }
}
