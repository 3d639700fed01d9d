use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use visitor_calc::serialization::save_with_config;
use visitor_calc::{
    Bindings, DEFAULT_MAX_DEPTH, EngineConfig, EngineError, Evaluation, ExpressionEngine,
    parse_binding,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Visitor Calc - evaluate and pretty-print arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "visitor-calc")]
#[command(about = "Evaluate arithmetic expressions with floor division and print their canonical form")]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate, e.g. 11-8/4*3+2
    #[arg(required_unless_present = "load")]
    pub expressions: Vec<String>,

    /// Variable binding as name=value (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub vars: Vec<(String, f64)>,

    /// Evaluate a serialized tree instead of parsing text
    #[arg(long, value_name = "STREAM")]
    pub load: Option<String>,

    /// Also print the serialized form of each parsed expression
    #[arg(long)]
    pub save: bool,

    /// Deepest tree accepted by the parser, loader and visitors
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub bindings: Bindings,
    pub load: Option<String>,
    pub save: bool,
    pub engine: EngineConfig,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        CliConfig {
            expressions: args.expressions,
            bindings: args.vars.into_iter().collect(),
            load: args.load,
            save: args.save,
            engine: EngineConfig::with_max_depth(args.max_depth),
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    if args.max_depth == 0 {
        bail!("--max-depth must be at least 1");
    }

    Ok(CliConfig::from(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn report(evaluation: &Evaluation) {
    println!("Result = {}", evaluation.result);
    println!("PrettyPrint -> {}", evaluation.pretty_print);
}

/// Evaluates every expression and prints its report, returning how many
/// could not be evaluated or serialized.
fn evaluate_all(engine: &ExpressionEngine, config: &CliConfig) -> usize {
    let results = engine.evaluate_batch_with_trees(&config.expressions, &config.bindings);
    let mut failures = 0;
    for (input, result) in config.expressions.iter().zip(results) {
        match result {
            Ok((tree, evaluation)) => {
                report(&evaluation);
                if config.save {
                    match save_with_config(&tree, engine.config()) {
                        Ok(stream) => println!("Serialized -> {}", stream),
                        Err(e) => {
                            warn!("Failed to serialize '{}': {}", input, e);
                            println!("{}", e);
                            failures += 1;
                        }
                    }
                }
            }
            Err(EngineError::InvalidInput(reason)) => {
                warn!("Rejected '{}': {}", input, reason);
                println!("Invalid Input");
                failures += 1;
            }
            Err(e) => {
                println!("{}", e);
                failures += 1;
            }
        }
    }
    failures
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let engine = ExpressionEngine::with_config(config.engine);

    if let Some(stream) = &config.load {
        info!("Evaluating serialized tree '{}'", stream);
        let evaluation = engine
            .evaluate_serialized(stream, &config.bindings)
            .context("Failed to load serialized expression")?;
        report(&evaluation);
    }

    let failures = evaluate_all(&engine, &config);
    if failures > 0 {
        bail!(
            "{} of {} expressions could not be evaluated",
            failures,
            config.expressions.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from([
            "visitor-calc",
            "3+4",
            "8*3/4",
            "--var",
            "x=2",
            "--max-depth",
            "16",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.expressions, vec!["3+4", "8*3/4"]);
            assert_eq!(args.vars, vec![("x".to_string(), 2.0)]);
            assert_eq!(args.max_depth, 16);
            assert!(!args.save);
            assert!(matches!(args.log_level, LogLevel::Warn));

            let config = CliConfig::from(args);
            assert_eq!(config.bindings.get("x"), Some(2.0));
            assert_eq!(config.engine.max_depth, 16);
        }
    }

    #[test]
    fn test_cli_args_require_expression_or_load() {
        assert!(CliArgs::try_parse_from(["visitor-calc"]).is_err());

        let args = CliArgs::try_parse_from(["visitor-calc", "--load", "Constant 3"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.expressions.is_empty());
            assert_eq!(args.load.as_deref(), Some("Constant 3"));
        }
    }

    #[test]
    fn test_cli_rejects_malformed_binding() {
        let args = CliArgs::try_parse_from(["visitor-calc", "1+1", "--var", "x"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_evaluate_all_counts_failures_without_aborting() {
        let args = CliArgs::try_parse_from(["visitor-calc", "3+4", "1++2", "9/2", "--save"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from(args);
            let engine = ExpressionEngine::with_config(config.engine);
            assert_eq!(evaluate_all(&engine, &config), 1);
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
