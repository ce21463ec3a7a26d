//! Artifact assembly: turns a [`StrategyBlueprint`] into the artifacts to
//! render, with their destinations and substitution maps.
//!
//! Planned order is fixed: contract, one implementation per entry, factory,
//! pipeline. Implementations and the factory are only planned when at least
//! one implementation was given; the pipeline only when requested.

use crate::domain::{
    artifact::{Artifact, ArtifactKind, Substitutions},
    common::RelativePath,
    error::DomainError,
    layout::{NAMESPACE_SEPARATOR, ProjectLayout},
    strategy::StrategyBlueprint,
};

const INDENT: &str = "    ";

/// Plan every artifact for a blueprint.
pub fn plan_artifacts(
    blueprint: &StrategyBlueprint,
    layout: &ProjectLayout,
) -> Result<Vec<Artifact>, DomainError> {
    let mut artifacts = Vec::with_capacity(blueprint.artifact_count());

    artifacts.push(contract(blueprint, layout)?);

    if !blueprint.implementations().is_empty() {
        for implementation in blueprint.implementations() {
            artifacts.push(implementation_artifact(blueprint, layout, implementation)?);
        }
        artifacts.push(factory(blueprint, layout)?);
    }

    if blueprint.pipeline() {
        artifacts.push(pipeline(blueprint, layout)?);
    }

    Ok(artifacts)
}

// ── Per-kind builders ─────────────────────────────────────────────────────────

fn contract(bp: &StrategyBlueprint, layout: &ProjectLayout) -> Result<Artifact, DomainError> {
    let class = bp.name().class_name();

    let mut methods: Vec<String> = bp.methods().iter().map(|m| contract_signature(m)).collect();
    if bp.pipeline() {
        methods.push(format!("{INDENT}public function getPipelines(): array;"));
    }

    let destination = destination(bp, layout, "Contracts", &format!("{class}StrategyContract"))?;
    let substitutions = Substitutions::new().with("name", class).with("methods", methods);

    Ok(Artifact::new(ArtifactKind::Contract, destination, substitutions))
}

fn implementation_artifact(
    bp: &StrategyBlueprint,
    layout: &ProjectLayout,
    implementation: &str,
) -> Result<Artifact, DomainError> {
    let mut methods: Vec<String> = bp.methods().iter().map(|m| implementation_body(m)).collect();
    if bp.pipeline() {
        methods.push(pipelines_body());
    }

    let destination = destination(bp, layout, "Implementations", implementation)?;
    let substitutions = Substitutions::new()
        .with("name", bp.name().class_name())
        .with("implementation", implementation)
        .with("methods", methods)
        .with("strategyNamespace", layout.strategy_namespace(bp.name()));

    Ok(Artifact::new(ArtifactKind::Implementation, destination, substitutions))
}

fn factory(bp: &StrategyBlueprint, layout: &ProjectLayout) -> Result<Artifact, DomainError> {
    let class = bp.name().class_name();
    let strategy_namespace = layout.strategy_namespace(bp.name());

    let (entries, imports): (Vec<String>, Vec<String>) = bp
        .implementations()
        .iter()
        .map(|implementation| {
            (
                factory_entry(implementation),
                format!("use {strategy_namespace}{NAMESPACE_SEPARATOR}Implementations{NAMESPACE_SEPARATOR}{implementation};"),
            )
        })
        .unzip();

    let destination = destination(bp, layout, "Factories", &format!("{class}Factory"))?;
    let substitutions = Substitutions::new()
        .with("name", class)
        .with("implementations", entries)
        .with("implementationClasses", imports)
        .with("strategyNamespace", strategy_namespace);

    Ok(Artifact::new(ArtifactKind::Factory, destination, substitutions))
}

fn pipeline(bp: &StrategyBlueprint, layout: &ProjectLayout) -> Result<Artifact, DomainError> {
    let class = bp.name().class_name();

    let destination = destination(bp, layout, "Pipelines", &format!("{class}Pipeline"))?;
    let substitutions = Substitutions::new()
        .with("name", class)
        .with("strategyNamespace", layout.strategy_namespace(bp.name()));

    Ok(Artifact::new(ArtifactKind::Pipeline, destination, substitutions))
}

fn destination(
    bp: &StrategyBlueprint,
    layout: &ProjectLayout,
    folder: &str,
    stem: &str,
) -> Result<RelativePath, DomainError> {
    layout
        .strategy_dir(bp.name())?
        .join(folder)?
        .join(format!("{stem}.{}", layout.extension()))
}

// ── Source fragments ──────────────────────────────────────────────────────────

/// `    public function pay(): void;`
pub fn contract_signature(method: &str) -> String {
    format!("{INDENT}public function {method}(): void;")
}

/// An empty method body matching [`contract_signature`], followed by a
/// blank line.
pub fn implementation_body(method: &str) -> String {
    format!("{INDENT}public function {method}(): void\n{INDENT}{{\n{INDENT}{INDENT}//\n{INDENT}}}\n")
}

fn pipelines_body() -> String {
    format!(
        "{INDENT}public function getPipelines(): array\n{INDENT}{{\n{INDENT}{INDENT}return [\n{INDENT}{INDENT}{INDENT}//\n{INDENT}{INDENT}];\n{INDENT}}}"
    )
}

/// `            'CreditCard' => new CreditCard(),`
pub fn factory_entry(implementation: &str) -> String {
    format!("{INDENT}{INDENT}{INDENT}'{implementation}' => new {implementation}(),")
}
