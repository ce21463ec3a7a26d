//! Integration tests for stratagen-core, wired to the real adapters.

use std::path::Path;
use std::sync::Arc;

use stratagen_adapters::{LayeredStubs, LocalFilesystem, MemoryFilesystem, ScriptedPrompter};
use stratagen_core::{
    application::{ApplicationError, StubService},
    prelude::*,
};

const ROOT: &str = "/project";
const STRATEGY_DIR: &str = "/project/app/Strategies/PaymentMethod";

fn service(fs: &MemoryFilesystem, prompter: ScriptedPrompter) -> StrategyService {
    let layout = ProjectLayout::new(ROOT);
    let stubs = LayeredStubs::for_project(&layout, None, Arc::new(fs.clone()));
    StrategyService::new(layout, Arc::new(fs.clone()), Box::new(stubs), Box::new(prompter))
}

/// Methods pay/restore, implementations CreditCard/DebitCard.
fn payment_answers(pipeline: bool) -> ScriptedPrompter {
    ScriptedPrompter::new(["pay", "restore", "", "CreditCard", "DebitCard", ""]).confirming(pipeline)
}

fn read(fs: &MemoryFilesystem, relative: &str) -> String {
    fs.read_file(Path::new(STRATEGY_DIR).join(relative))
        .unwrap_or_else(|| panic!("{relative} was not written"))
}

#[test]
fn full_strategy_without_pipeline() {
    let fs = MemoryFilesystem::new();
    let outcome = service(&fs, payment_answers(false))
        .make(MakeRequest::named("PaymentMethod"))
        .unwrap();

    assert!(matches!(outcome, GenerationOutcome::Created { .. }));
    assert_eq!(fs.file_count(), 4);

    let contract = read(&fs, "Contracts/PaymentMethodStrategyContract.php");
    assert!(contract.contains("namespace App\\Strategies\\PaymentMethod\\Contracts;"));
    assert!(contract.contains("interface PaymentMethodStrategyContract"));
    assert!(contract.contains("    public function pay(): void;\n    public function restore(): void;"));
    assert!(!contract.contains("getPipelines"));

    let credit = read(&fs, "Implementations/CreditCard.php");
    assert!(credit.contains("namespace App\\Strategies\\PaymentMethod\\Implementations;"));
    assert!(credit.contains("use App\\Strategies\\PaymentMethod\\Contracts\\PaymentMethodStrategyContract;"));
    assert!(credit.contains("final class CreditCard implements PaymentMethodStrategyContract"));
    assert!(credit.contains("public function pay(): void"));
    assert!(credit.contains("public function restore(): void"));

    let factory = read(&fs, "Factories/PaymentMethodFactory.php");
    assert!(factory.contains("use App\\Strategies\\PaymentMethod\\Implementations\\CreditCard;"));
    assert!(factory.contains("use App\\Strategies\\PaymentMethod\\Implementations\\DebitCard;"));
    assert!(factory.contains("'CreditCard' => new CreditCard(),"));
    assert!(factory.contains("'DebitCard' => new DebitCard(),"));
    assert!(factory.contains("public static function make(string $implementation): PaymentMethodStrategyContract"));
    assert_eq!(factory.matches("' => new ").count(), 2);
    assert!(factory.contains("if (! array_key_exists($implementation, $implementations)) {"));
    assert!(factory.contains("throw new InvalidArgumentException("));

    for file in fs.list_files() {
        let text = fs.read_file(&file).unwrap();
        assert!(!text.contains("{{ "), "{} has unresolved placeholders", file.display());
    }
}

#[test]
fn pipeline_adds_a_fifth_file_and_contract_method() {
    let fs = MemoryFilesystem::new();
    service(&fs, payment_answers(true))
        .make(MakeRequest::named("PaymentMethod"))
        .unwrap();

    assert_eq!(fs.file_count(), 5);

    let pipeline = read(&fs, "Pipelines/PaymentMethodPipeline.php");
    assert!(pipeline.contains("final class PaymentMethodPipeline"));
    assert!(pipeline.contains("handle(mixed $payload, Closure $next): mixed"));

    let contract = read(&fs, "Contracts/PaymentMethodStrategyContract.php");
    assert!(contract.contains("public function getPipelines(): array;"));

    let debit = read(&fs, "Implementations/DebitCard.php");
    assert!(debit.contains("public function getPipelines(): array"));
}

#[test]
fn blank_strategy_prompts_for_the_name_and_writes_only_the_contract() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(["PaymentMethod", "", ""]);
    service(&fs, prompter).make(MakeRequest::default()).unwrap();

    assert_eq!(
        fs.list_files(),
        [Path::new(STRATEGY_DIR).join("Contracts/PaymentMethodStrategyContract.php")]
    );
}

#[test]
fn second_run_collides_after_only_the_name_question() {
    let fs = MemoryFilesystem::new();
    service(&fs, ScriptedPrompter::new(["PaymentMethod", "", ""]))
        .make(MakeRequest::default())
        .unwrap();
    let before = fs.list_files();

    let prompter = ScriptedPrompter::new(["PaymentMethod"]);
    let svc = service(&fs, prompter);
    let outcome = svc.make(MakeRequest::default()).unwrap();

    match outcome {
        GenerationOutcome::Collision { class_name, path, .. } => {
            assert_eq!(class_name, "PaymentMethod");
            assert_eq!(path, Path::new(STRATEGY_DIR));
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert_eq!(fs.list_files(), before);
}

#[test]
fn nested_names_place_files_under_the_class_name() {
    let fs = MemoryFilesystem::new();
    let prompter = ScriptedPrompter::new(["charge", "", "Stripe", ""]);
    service(&fs, prompter)
        .make(MakeRequest::named("\\Billing/PaymentMethod/"))
        .unwrap();

    let contract = read(&fs, "Contracts/PaymentMethodStrategyContract.php");
    assert!(contract.contains("namespace App\\Strategies\\PaymentMethod\\Contracts;"));

    let factory = read(&fs, "Factories/PaymentMethodFactory.php");
    assert!(factory.contains("use App\\Strategies\\PaymentMethod\\Implementations\\Stripe;"));
    assert!(!fs.exists(Path::new("/project/app/Strategies/Billing")));
}

#[test]
fn nested_name_collides_with_an_existing_class_directory() {
    let fs = MemoryFilesystem::new();
    service(&fs, ScriptedPrompter::new(["", ""]))
        .make(MakeRequest::named("PaymentMethod"))
        .unwrap();
    let before = fs.list_files();

    let outcome = service(&fs, ScriptedPrompter::new(Vec::<String>::new()))
        .make(MakeRequest::named("Billing/PaymentMethod"))
        .unwrap();

    match outcome {
        GenerationOutcome::Collision { strategy, class_name, path } => {
            assert_eq!(strategy, "Billing/PaymentMethod");
            assert_eq!(class_name, "PaymentMethod");
            assert_eq!(path, Path::new(STRATEGY_DIR));
        }
        other => panic!("expected collision, got {other:?}"),
    }
    assert_eq!(fs.list_files(), before);
}

#[test]
fn project_override_stub_wins() {
    let fs = MemoryFilesystem::new().with_file(
        "/project/stubs/laravel-strategy/strategy-contract.stub",
        "// custom {{ name }} in {{ namespace }}",
    );
    service(&fs, ScriptedPrompter::new(["", ""]))
        .make(MakeRequest::named("PaymentMethod"))
        .unwrap();

    assert_eq!(
        read(&fs, "Contracts/PaymentMethodStrategyContract.php"),
        "// custom PaymentMethod in App\\Strategies\\PaymentMethod\\Contracts"
    );
}

#[test]
fn missing_stub_everywhere_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let layout = ProjectLayout::new(ROOT);
    let stubs = LayeredStubs::for_project(&layout, Some("/nowhere".into()), Arc::new(fs.clone()));
    let svc = StrategyService::new(
        layout,
        Arc::new(fs.clone()),
        Box::new(stubs),
        Box::new(ScriptedPrompter::new(["", ""])),
    );

    let err = svc.make(MakeRequest::named("PaymentMethod")).unwrap_err();
    assert!(matches!(
        err,
        StratagenError::Application(ApplicationError::TemplateNotFound { .. })
    ));
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn stub_listing_reports_overrides() {
    let fs = MemoryFilesystem::new().with_file("/project/stubs/laravel-strategy/strategy-factory.stub", "f");
    let layout = ProjectLayout::new(ROOT);
    let stubs = LayeredStubs::for_project(&layout, None, Arc::new(fs));

    let infos = StubService::new(Box::new(stubs)).list();
    let factory = infos.iter().find(|i| i.id == StubId::StrategyFactory).unwrap();
    assert!(matches!(factory.origin, Some(StubOrigin::Override(_))));
    assert!(
        infos
            .iter()
            .filter(|i| i.id != StubId::StrategyFactory)
            .all(|i| i.origin == Some(StubOrigin::Bundled))
    );
}

#[test]
fn writes_real_files_under_a_temp_root() {
    let tmp = tempfile::TempDir::new().unwrap();
    let layout = ProjectLayout::new(tmp.path());
    let fs = Arc::new(LocalFilesystem::new());
    let stubs = LayeredStubs::for_project(&layout, None, fs.clone());
    let svc = StrategyService::new(layout, fs, Box::new(stubs), Box::new(payment_answers(false)));

    let outcome = svc.make(MakeRequest::named("PaymentMethod")).unwrap();
    assert_eq!(outcome.files().len(), 4);
    for file in outcome.files() {
        assert!(file.is_file(), "{} missing", file.display());
    }
}
