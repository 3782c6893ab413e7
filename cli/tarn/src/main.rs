//! Tarn CLI — resolve build-target requests into target descriptors.

mod commands;
mod manifest;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use manifest::TarnManifest;

#[derive(Parser)]
#[command(name = "tarn", version, about = "Build-target configuration resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Tarn project
    Init {
        /// Project name (also the name of its primary module)
        name: String,
    },
    /// Resolve a target into its full configuration
    Resolve {
        /// Target name (default: [targets] default in tarn.toml)
        name: Option<String>,
        /// Platform identifier (e.g., Win64, Linux, Mac)
        #[arg(long)]
        platform: Option<String>,
        /// Build configuration (Debug, DebugGame, Development, Test, Shipping)
        #[arg(long)]
        configuration: Option<String>,
        /// Output format (human, json, toml)
        #[arg(long)]
        format: Option<String>,
    },
    /// Manage target rules
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List built-in and project targets
    List,
    /// Show details of a target
    Describe {
        /// Target name
        name: String,
        /// Output format (default: human-readable, "toml" for TOML)
        #[arg(long)]
        format: Option<String>,
    },
    /// Add a target rule file to targets/
    Add {
        /// Target name
        name: String,
        /// Target type (editor, game, server, client, program)
        #[arg(long = "type")]
        target_type: Option<String>,
        /// Module to link (default: the target name)
        #[arg(long)]
        module: Option<String>,
    },
    /// Validate a target's rules
    Validate {
        /// Target name
        name: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { name } => commands::init::run(&name),

        Commands::Resolve {
            name,
            platform,
            configuration,
            format,
        } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            commands::resolve::run(
                project_dir.as_deref(),
                manifest.as_ref(),
                name.as_deref(),
                platform.as_deref(),
                configuration.as_deref(),
                format.as_deref(),
            )
        }

        Commands::Target { action } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            match action {
                TargetAction::List => commands::target::list(project_dir.as_deref()),
                TargetAction::Describe { name, format } => commands::target::describe(
                    &name,
                    project_dir.as_deref(),
                    manifest.as_ref(),
                    format.as_deref(),
                ),
                TargetAction::Add {
                    name,
                    target_type,
                    module,
                } => {
                    let project_dir = project_dir.unwrap_or(cwd);
                    commands::target::add(
                        &name,
                        &project_dir,
                        target_type.as_deref(),
                        module.as_deref(),
                    )
                }
                TargetAction::Validate { name } => {
                    commands::target::validate(&name, project_dir.as_deref())
                }
            }
        }
    }
}

/// Try to load a manifest from the current directory upward. Returns (None, None) if not found.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<(Option<TarnManifest>, Option<PathBuf>)> {
    match TarnManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use tarn_targets::{BuildSettingsVersion, IncludeOrderVersion, TargetType};

    /// Full workflow: init → add → validate → resolve.
    #[test]
    fn init_add_validate_resolve_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("Plugin_NavMesh");

        // 1. Init
        commands::init::create_project(&project_path, "Plugin_NavMesh").unwrap();

        // 2. Manifest is found from inside the project
        let (manifest, project_dir) = load_manifest_optional(&project_path.join("targets")).unwrap();
        let manifest = manifest.unwrap();
        let project_dir = project_dir.unwrap();
        assert_eq!(project_dir, project_path);

        // 3. Add a server target
        commands::target::add("NavServer", &project_dir, Some("server"), Some("Plugin_NavMesh"))
            .unwrap();
        commands::target::validate("NavServer", Some(&project_dir)).unwrap();

        // 4. Resolve the default (editor) target with manifest defaults
        let editor = commands::resolve::resolve(
            Some(&project_dir),
            Some(&manifest),
            None,
            Some("Win64"),
            None,
        )
        .unwrap();
        assert_eq!(editor.name(), "Plugin_NavMeshEditor");
        assert_eq!(editor.target_type(), TargetType::Editor);
        assert_eq!(editor.build_settings_version(), BuildSettingsVersion::V2);
        assert_eq!(editor.include_order_version(), IncludeOrderVersion::Unreal5_1);
        assert_eq!(editor.extra_modules().as_slice(), ["Plugin_NavMesh"]);

        // 5. Resolve the added target
        let server = commands::resolve::resolve(
            Some(&project_dir),
            Some(&manifest),
            Some("NavServer"),
            Some("Linux"),
            Some("Shipping"),
        )
        .unwrap();
        assert_eq!(server.target_type(), TargetType::Server);
    }

    /// Project-level resolver defaults flow into targets without overrides.
    #[test]
    fn manifest_resolver_defaults_apply() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tarn.toml"),
            "[project]\nname = \"Late\"\n\n[resolver]\nbuild_settings_version = \"V5\"\ninclude_order_version = \"Unreal5_4\"\n",
        )
        .unwrap();
        commands::target::add("LateGame", dir.path(), None, Some("Late")).unwrap();

        let (manifest, project_dir) = load_manifest_optional(dir.path()).unwrap();
        let d = commands::resolve::resolve(
            project_dir.as_deref(),
            manifest.as_ref(),
            Some("LateGame"),
            Some("Linux"),
            Some("Development"),
        )
        .unwrap();
        assert_eq!(d.build_settings_version(), BuildSettingsVersion::LATEST);
        assert_eq!(d.include_order_version(), IncludeOrderVersion::LATEST);
    }

    #[test]
    fn cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "tarn",
            "resolve",
            "Plugin_NavMeshEditor",
            "--platform",
            "Win64",
            "--configuration",
            "Development",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve {
                name,
                platform,
                format,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("Plugin_NavMeshEditor"));
                assert_eq!(platform.as_deref(), Some("Win64"));
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn cli_parses_target_add_type_flag() {
        let cli = Cli::try_parse_from(["tarn", "target", "add", "Srv", "--type", "server"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Target {
                action: TargetAction::Add { .. }
            }
        ));
    }
}
