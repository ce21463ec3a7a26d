//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "make a strategy" or "list stubs".

pub mod collision_guard;
pub mod input_collector;
pub mod strategy_service;
pub mod stub_renderer;
pub mod stub_service;

pub use collision_guard::CollisionGuard;
pub use input_collector::{InputCollector, is_terminator, ordinal};
pub use strategy_service::{GenerationOutcome, MakeRequest, StrategyService};
pub use stub_renderer::{RenderedArtifact, StubRenderer};
pub use stub_service::{StubInfo, StubService};
