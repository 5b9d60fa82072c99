use clap::{ArgAction, Args, Parser, Subcommand};
use semver_next::{FormatError, Level, PreRelease, Version};
use tracing::{debug, metadata::LevelFilter};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] FormatError),

    #[error("The {level} field of version `{version}` cannot be incremented any further")]
    VersionOverflow { version: String, level: Level },
}

#[derive(Args, Debug)]
struct BumpArgs {
    /// The current version string, e.g. `1.2.3` or `1.2.3-rc.1`
    version: String,

    /// Attach this pre-release tag (e.g. `rc.1`) to the next version. Omit for no tag.
    #[arg(short, long, value_name = "TAG")]
    pre_release: Option<String>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more details to stderr. Repeat for more (`-vv`). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Increments major and resets minor and patch
    Major(BumpArgs),

    /// Increments minor and resets patch
    Minor(BumpArgs),

    /// Increments patch
    Patch(BumpArgs),

    /// Removes the pre-release tag, keeping major, minor, and patch
    Release {
        /// The current version string, e.g. `1.2.3-rc.1`
        version: String,
    },

    /// Validates that a version is of the form `MAJOR.MINOR.PATCH[-PRE_RELEASE]`
    Valid {
        /// The version string to validate
        version: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    let (level, BumpArgs { version, pre_release }) = match cli.command {
        Commands::Major(args) => (Level::Major, args),
        Commands::Minor(args) => (Level::Minor, args),
        Commands::Patch(args) => (Level::Patch, args),
        Commands::Release { version } => (
            Level::Release,
            BumpArgs {
                version,
                pre_release: None,
            },
        ),
        Commands::Valid { version } => {
            return Ok(match Version::parse(&version) {
                Ok(_) => ("true".to_string(), 0),
                Err(e) => {
                    debug!(error = %e, "version is not valid");
                    ("false".to_string(), 1)
                }
            });
        }
    };

    let current = Version::parse(&version)?;
    let pre_release = pre_release.as_deref().map(PreRelease::parse).transpose()?;
    let next = current
        .checked_next(&level.increment(pre_release))
        .ok_or_else(|| CliError::VersionOverflow {
            version: current.to_string(),
            level,
        })?;

    Ok((next.to_string(), 0))
}
