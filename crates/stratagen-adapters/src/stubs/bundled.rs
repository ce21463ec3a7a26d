//! Stubs compiled into the binary.

use stratagen_core::{
    application::ports::{StubOrigin, StubSource, StubText},
    domain::StubId,
    error::StratagenResult,
};

const CONTRACT: &str = include_str!("../../stubs/strategy-contract.stub");
const IMPLEMENTATION: &str = include_str!("../../stubs/strategy-implementation.stub");
const FACTORY: &str = include_str!("../../stubs/strategy-factory.stub");
const PIPELINE: &str = include_str!("../../stubs/strategy-pipeline.stub");

/// The default stubs. Always has every [`StubId`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStubs;

impl BundledStubs {
    pub fn new() -> Self {
        Self
    }

    pub fn content(id: StubId) -> &'static str {
        match id {
            StubId::StrategyContract => CONTRACT,
            StubId::StrategyImplementation => IMPLEMENTATION,
            StubId::StrategyFactory => FACTORY,
            StubId::StrategyPipeline => PIPELINE,
        }
    }
}

impl StubSource for BundledStubs {
    fn locate(&self, _id: StubId) -> Option<StubOrigin> {
        Some(StubOrigin::Bundled)
    }

    fn load(&self, id: StubId) -> StratagenResult<StubText> {
        Ok(StubText {
            id,
            origin: StubOrigin::Bundled,
            content: Self::content(id).to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratagen_core::domain::token;

    #[test]
    fn every_stub_declares_a_namespace() {
        for id in StubId::ALL {
            let text = BundledStubs.load(id).unwrap();
            assert!(text.content.starts_with("<?php"), "{id}");
            assert!(text.content.contains("namespace {{ namespace }};"), "{id}");
        }
    }

    #[test]
    fn stubs_use_the_documented_placeholders() {
        let expects = [
            (StubId::StrategyContract, &["name", "methods"][..]),
            (
                StubId::StrategyImplementation,
                &["name", "implementation", "methods", "strategyNamespace"][..],
            ),
            (
                StubId::StrategyFactory,
                &["name", "implementations", "implementationClasses", "strategyNamespace"][..],
            ),
            (StubId::StrategyPipeline, &["name"][..]),
        ];

        for (id, keys) in expects {
            let content = BundledStubs::content(id);
            for key in keys {
                assert!(content.contains(&token(key)), "{id} is missing {key}");
            }
        }
    }

    #[test]
    fn factory_make_is_static_and_guards_unknown_names() {
        let factory = BundledStubs::content(StubId::StrategyFactory);
        assert!(factory.contains("public static function make(string $implementation): {{ name }}StrategyContract"));
        assert!(factory.contains("InvalidArgumentException"));
    }

    #[test]
    fn pipeline_handle_takes_payload_and_next() {
        let pipeline = BundledStubs::content(StubId::StrategyPipeline);
        assert!(pipeline.contains("public function handle(mixed $payload, Closure $next): mixed"));
    }
}
