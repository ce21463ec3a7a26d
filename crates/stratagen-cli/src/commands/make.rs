//! `stratagen make` - generate one strategy.

use tracing::{debug, instrument};

use stratagen_core::application::{GenerationOutcome, MakeRequest, StrategyService};

use crate::{
    cli::{GlobalArgs, MakeArgs},
    commands::{display_relative, local_filesystem, project_stubs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::select_prompter,
};

#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<ask>")))]
pub fn execute(
    args: MakeArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&args.project_root);
    let filesystem = local_filesystem();
    let stubs = project_stubs(&layout, &config, filesystem.clone());
    debug!(root = %layout.root().display(), layers = stubs.len(), "Stub sources ready");

    let service = StrategyService::new(layout, filesystem, Box::new(stubs), select_prompter());
    let request = MakeRequest {
        name: args.name,
        dry_run: args.dry_run,
    };

    let outcome = match service.make(request)? {
        GenerationOutcome::Collision {
            class_name, path, ..
        } if args.strict => return Err(CliError::StrategyExists { class_name, path }),
        outcome => outcome,
    };

    if output.is_json() {
        output.json(&outcome)?;
    } else {
        report(&outcome, &service, &output)?;
    }

    Ok(())
}

fn report(
    outcome: &GenerationOutcome,
    service: &StrategyService,
    output: &OutputManager,
) -> CliResult<()> {
    let root = service.layout().root();

    match outcome {
        GenerationOutcome::Collision { class_name, .. } => {
            output.error(&format!("Strategy {class_name} already exists. Aborting."))?;
        }
        GenerationOutcome::Created { strategy, files, issues } => {
            for issue in issues {
                output.warning(&issue.to_string())?;
            }
            for file in files {
                output.success(&format!("Created {}", display_relative(file, root)))?;
            }
            output.header(&format!("Strategy {strategy} created ({} files)", files.len()))?;
        }
        GenerationOutcome::Planned { strategy, files, issues } => {
            for issue in issues {
                output.warning(&issue.to_string())?;
            }
            output.header(&format!("Dry run: strategy {strategy} would create"))?;
            for file in files {
                output.info(&display_relative(file, root))?;
            }
        }
    }

    Ok(())
}
