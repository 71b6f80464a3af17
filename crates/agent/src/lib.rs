//! Advisory core for the farming assistant
//!
//! Combines the analysis pipeline from `farm-advisor-nlp` with a
//! deterministic response selector and a TTL-bounded per-user context
//! store. The [`Advisor`] is the interface a messaging transport calls:
//!
//! ```
//! use farm_advisor_agent::Advisor;
//! use farm_advisor_config::DomainConfig;
//!
//! let advisor = Advisor::new(&DomainConfig::builtin()).unwrap();
//! let reply = advisor.respond("user-1", "متى ازرع الطماطم؟", None);
//! assert_eq!(reply.intent, "planting_time");
//! assert_eq!(reply.crop.as_deref(), Some("طماطم"));
//! ```

pub mod advisor;
pub mod context;
pub mod selector;

pub use advisor::Advisor;
pub use context::ContextStore;
pub use selector::AdvisorySelector;

pub use farm_advisor_core::{Button, Reply, INTENT_FALLBACK, INTENT_INFERRED};
