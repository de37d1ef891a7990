use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Git pre-commit hook that offers to bump the project version on selected branches.
#[derive(Debug, Parser)]
#[command(name = "pygit-bump", version, about)]
struct Cli {
    /// Without a subcommand the binary acts as the hook itself, so it can be
    /// copied or linked straight to `.git/hooks/pre-commit`.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the version-bump workflow (always exits 0)
    Hook {
        /// Path the hook was invoked as; the project root is two levels above its directory
        #[arg(long)]
        hook_path: Option<PathBuf>,
        /// Read answers from stdin instead of the controlling terminal
        #[arg(long)]
        no_tty: bool,
    },
    /// Install the pre-commit shim and optionally set pgb.branch / pgb.path
    Install {
        #[arg(long)]
        project_root: Option<PathBuf>,
        /// Comma-separated branch-name prefixes to bump on
        #[arg(long)]
        branch: Option<String>,
        /// Dotted `module.VARIABLE` path of the version string
        #[arg(long)]
        path: Option<String>,
    },
    /// Remove the pre-commit shim
    Uninstall {
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
    /// Print the branch decision and located version as JSON
    Status {
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_env("PGB_LOG")
                .unwrap_or_else(|_| EnvFilter::new("pygit_bump=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            pygit_bump::run_hook(&invocation_path(), false);
            ExitCode::SUCCESS
        }
        Some(Commands::Hook { hook_path, no_tty }) => {
            let hook_path = hook_path.unwrap_or_else(invocation_path);
            pygit_bump::run_hook(&hook_path, no_tty);
            ExitCode::SUCCESS
        }
        Some(Commands::Install {
            project_root,
            branch,
            path,
        }) => {
            let binary = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("pygit-bump"));
            pygit_bump::run_install(project_root, &binary, branch.as_deref(), path.as_deref())
        }
        Some(Commands::Uninstall { project_root }) => pygit_bump::run_uninstall(project_root),
        Some(Commands::Status { project_root }) => pygit_bump::run_status(project_root),
    }
}

/// argv[0], i.e. the hook path when the binary is installed as the hook itself.
fn invocation_path() -> PathBuf {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".git/hooks/pre-commit"))
}
