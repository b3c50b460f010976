use bellman::output::{self, DEFAULT_DISTANCES_FILE, DEFAULT_PATHS_FILE};
use bellman::{BellmanFordOptions, load};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Bellman(bellman::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Bellman(err) => write!(f, "{err}"),
        }
    }
}

impl From<bellman::Error> for CliError {
    fn from(value: bellman::Error) -> Self {
        Self::Bellman(value)
    }
}

#[derive(Debug)]
struct Args {
    input: String,
    distances_out: String,
    paths_out: String,
    print_adjacency: bool,
    early_exit: bool,
    quiet: bool,
}

fn usage() -> &'static str {
    "bellman\n\
\n\
USAGE:\n\
  bellman [--out <path>] [--paths-out <path>] [--print-adjacency] [--no-early-exit] [--quiet] <input>\n\
\n\
NOTES:\n\
  - Distances are written to output.txt and paths to paths.txt unless overridden.\n\
  - The first vertex declared in <input> is the source.\n\
  - Stage timings go to stdout; set RUST_LOG=debug for per-round diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut input: Option<String> = None;
    let mut distances_out = DEFAULT_DISTANCES_FILE.to_string();
    let mut paths_out = DEFAULT_PATHS_FILE.to_string();
    let mut print_adjacency = false;
    let mut early_exit = true;
    let mut quiet = false;

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--print-adjacency" => print_adjacency = true,
            "--no-early-exit" => early_exit = false,
            "--quiet" | "-q" => quiet = true,
            "--out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                distances_out = path.clone();
            }
            "--paths-out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                paths_out = path.clone();
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                input = Some(path.to_string());
            }
        }
    }

    let Some(input) = input else {
        return Err(CliError::Usage(usage()));
    };
    Ok(Args {
        input,
        distances_out,
        paths_out,
        print_adjacency,
        early_exit,
        quiet,
    })
}

fn report_timing(args: &Args, stage: &str, elapsed: Duration) {
    if !args.quiet {
        println!("[timing] stage={stage} elapsed={elapsed:?}");
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let start = Instant::now();
    let loaded = load::load_file(&args.input)?;
    report_timing(&args, "load", start.elapsed());

    if args.print_adjacency {
        print!("{}", loaded.graph.display(&loaded.symbols));
    }

    let options = BellmanFordOptions {
        early_exit: args.early_exit,
    };
    let start = Instant::now();
    let result = bellman::bellman_ford_with_options(&loaded.graph, options);
    report_timing(&args, "compute", start.elapsed());

    let stats = result.stats();
    info!(
        source = loaded.source_label(),
        vertices = loaded.graph.vertex_count(),
        edges = loaded.graph.edge_count(),
        rounds = stats.rounds,
        improvements = stats.improvements,
        converged = stats.converged,
        "solved"
    );

    let start = Instant::now();
    output::write_files(
        &args.distances_out,
        &args.paths_out,
        &loaded.symbols,
        &result,
    )?;
    report_timing(&args, "write", start.elapsed());
    Ok(())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
