//! Implementation of the `stratagen list` command.

use stratagen_adapters::stubs::unrecognized_stubs;
use stratagen_core::application::{StubInfo, StubService};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    commands::{local_filesystem, project_stubs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.layout(&args.project_root);
    let stubs = project_stubs(&layout, &config, local_filesystem());
    let infos = StubService::new(Box::new(stubs)).list();

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Stubs:")?;
            let width = infos.iter().map(|i| i.file_name.len()).max().unwrap_or(0);
            for info in &infos {
                output.print(&format!(
                    "  {:<width$}  {}",
                    info.file_name,
                    origin_label(info),
                ))?;
            }
        }

        ListFormat::Json => output.json(&infos)?,

        ListFormat::List => {
            for info in &infos {
                output.print(&info.file_name)?;
            }
        }
    }

    for stray in unrecognized_stubs(&layout.override_dir()) {
        output.warning(&format!(
            "{} is not a known stub and will be ignored",
            stray.display()
        ))?;
    }

    Ok(())
}

fn origin_label(info: &StubInfo) -> String {
    info.origin
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "missing".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stratagen_core::application::StubOrigin;
    use stratagen_core::domain::StubId;

    fn info(origin: Option<StubOrigin>) -> StubInfo {
        StubInfo {
            id: StubId::StrategyFactory,
            file_name: StubId::StrategyFactory.file_name(),
            origin,
        }
    }

    #[test]
    fn labels_each_origin() {
        assert_eq!(origin_label(&info(Some(StubOrigin::Bundled))), "bundled");
        assert_eq!(
            origin_label(&info(Some(StubOrigin::Override(PathBuf::from("/p/stubs/laravel-strategy/strategy-factory.stub"))))),
            "override (/p/stubs/laravel-strategy/strategy-factory.stub)"
        );
        assert_eq!(origin_label(&info(None)), "missing");
    }
}
