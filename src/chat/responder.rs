//! Canned chat responder
//!
//! Picks one of a closed table of canned multi-paragraph responses uniformly
//! at random, independent of the input. A simulated typing delay (base plus
//! random jitter) models the assistant "thinking" before the reply lands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Base simulated typing delay
pub const DEFAULT_BASE_LATENCY: Duration = Duration::from_millis(1500);
/// Upper bound of the random jitter added to the base delay
pub const DEFAULT_JITTER: Duration = Duration::from_millis(1000);

/// Greeting shown when a conversation starts or resets
pub const GREETING: &str = "Hi! I'm your AI pair programmer. I can help you write code, \
debug issues, explain complex concepts, and build applications.\n\n\
What would you like to work on today?";

const CANNED_RESPONSES: [&str; 4] = [
    "I'd be happy to help! Let me analyze that for you.\n\n\
     Here's what I found:\n\n\
     - This is a mobile UX demonstration\n\
     - It features a distinctive dark theme\n\
     - The interface is fully responsive",
    "Great question! Here's a code example:\n\n\
     ```javascript\nfunction greet(name) {\n  return `Hello, ${name}!`;\n}\n\
console.log(greet('World'));\n```\n\n\
     This function demonstrates a simple greeting pattern.",
    "I can help you with that! The key considerations are:\n\n\
     - User experience on mobile devices\n\
     - Touch-optimized controls\n\
     - Responsive layout design\n\
     - Performance optimization\n\n\
     Would you like me to elaborate on any of these points?",
    "Let me create that for you:\n\n\
     ```css\n.container {\n  display: flex;\n  flex-direction: column;\n  \
background: #1a1a1a;\n  color: #e8e8e8;\n}\n```\n\n\
     This CSS creates a dark-themed container with flexbox layout.",
];

/// Uniformly random canned-response picker with simulated typing latency
pub struct ChatResponder {
    rng: Mutex<StdRng>,
    base_latency: Duration,
    jitter: Duration,
}

impl ChatResponder {
    /// Create a responder with the default latency and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            base_latency: DEFAULT_BASE_LATENCY,
            jitter: DEFAULT_JITTER,
        }
    }

    /// Override the simulated latency (tests pass zero for both)
    pub fn with_latency(mut self, base: Duration, jitter: Duration) -> Self {
        self.base_latency = base;
        self.jitter = jitter;
        self
    }

    /// Seed the RNG for deterministic selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// The fixed conversation-start greeting
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Pick a canned response for the given input.
    ///
    /// Selection ignores the input entirely; the call sleeps for the
    /// simulated typing delay before returning.
    pub async fn respond(&self, _input: &str) -> &'static str {
        let (delay, index) = {
            let mut rng = match self.rng.lock() {
                Ok(rng) => rng,
                Err(poisoned) => poisoned.into_inner(),
            };
            let jitter_ms = if self.jitter.is_zero() {
                0
            } else {
                rng.gen_range(0..=self.jitter.as_millis() as u64)
            };
            (
                self.base_latency + Duration::from_millis(jitter_ms),
                rng.gen_range(0..CANNED_RESPONSES.len()),
            )
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        CANNED_RESPONSES[index]
    }
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new()
    }
}
