//! taskgate - Content-moderation gate for agent task descriptions
//!
//! A fast, deterministic screen that runs before a task is handed to a model.
//!
//! # Usage
//!
//! ```bash
//! # As a pipeline gate (reads a JSON task envelope from stdin)
//! echo '{"task":"how to make a bomb"}' | taskgate
//!
//! # Classify a literal string
//! taskgate --text "how to kill a zombie process"
//!
//! # With a custom ruleset
//! taskgate --ruleset ./ruleset.toml
//! ```

use std::env;
use std::io::{self, Read, Write};

use taskgate::{
    audit::AuditLogger,
    config::GateConfig,
    engine::ModerationEngine,
    input::TaskInput,
    output::GateOutput,
    rules::RuleRegistry,
};

/// Print version information
fn print_version() {
    println!("taskgate {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"taskgate - Content-moderation gate for agent task descriptions

USAGE:
    taskgate [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -t, --text TEXT         Classify TEXT instead of reading stdin
    -c, --config PATH       Path to config file
    -r, --ruleset PATH      Path to a custom ruleset file

ENVIRONMENT:
    TASKGATE_SHADOW=1       Report clear but audit the real verdict

USAGE AS GATE:
    The orchestrator pipes one JSON envelope per task:
    {{"task": "...", "task_id": "...", "agent": "..."}}
    and reads the JSON verdict from stdout:
    {{"verdict": "blocked", "category": "...", "userMessage": "..."}}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    text: Option<String>,
    config_path: Option<String>,
    ruleset_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            text: None,
            config_path: None,
            ruleset_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-t" | "--text" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.text = Some(args[i].clone());
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                "-r" | "--ruleset" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.ruleset_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--text=") => {
                    result.text = Some(arg.trim_start_matches("--text=").to_string());
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                arg if arg.starts_with("--ruleset=") => {
                    result.ruleset_path = Some(arg.trim_start_matches("--ruleset=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    // Handle help and version
    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    // Load configuration
    let config = if let Some(ref path) = args.config_path {
        GateConfig::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            GateConfig::default()
        })
    } else {
        GateConfig::load()
    };

    // Resolve the rule registry: CLI flag wins over config, config over builtin.
    // A broken ruleset is fatal; a broken rule is never skipped.
    let ruleset_path = args
        .ruleset_path
        .map(std::path::PathBuf::from)
        .or_else(|| config.ruleset_path());
    let registry = match ruleset_path {
        Some(path) => match RuleRegistry::from_file(&path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error: Failed to load ruleset from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RuleRegistry::builtin(),
    };

    // Compile the engine
    let engine = match ModerationEngine::with_scan_limit(&registry, config.limits.max_scan_bytes) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: Failed to compile ruleset: {}", e);
            std::process::exit(1);
        }
    };

    // Create audit logger
    let audit_path = if config.general.audit_log {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());

    // Shadow mode: report clear, audit the real verdict
    let shadow = env::var("TASKGATE_SHADOW").is_ok();

    // Resolve the task envelope
    let input = if let Some(text) = args.text {
        TaskInput::from_text(text)
    } else {
        let mut input_json = String::new();
        if io::stdin().read_to_string(&mut input_json).is_err() {
            input_json.clear();
        }

        // No input = nothing to screen
        if input_json.trim().is_empty() {
            println!("{}", GateOutput::clear().to_json());
            return;
        }

        match TaskInput::from_json(&input_json) {
            Ok(input) => input,
            Err(e) => {
                // Fail closed: a malformed envelope could be an evasion attempt
                eprintln!("Error: Failed to parse task envelope (blocking): {}", e);
                let output = GateOutput::blocked(
                    taskgate::Category::IllegalActivity,
                    "This task could not be screened because its envelope was \
                     malformed. It has been blocked.",
                );
                println!("{}", output.to_json());
                return;
            }
        }
    };

    // Run the check
    let result = engine.check(&input.task);

    // Log the verdict
    if let Err(e) = logger.log_verdict(&input, &result, shadow) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    // Generate output
    let output = if shadow {
        GateOutput::clear()
    } else {
        GateOutput::from_result(&result)
    };

    // Write to stdout
    let json = output.to_json();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    let _ = handle.flush();
}
