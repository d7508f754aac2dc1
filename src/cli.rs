//! CLI interface for ai-orchestrator

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::helpers::{DebugHelper, FrontendHelper};
use crate::orchestrator::{Orchestrator, TaskCategory};
use crate::providers::AiResponse;
use crate::skills::SkillLibrary;

#[derive(Parser)]
#[command(name = "ai-orchestrator")]
#[command(about = "Route prompts to the best model for the task, with automatic fallback", long_about = None)]
#[command(version)]
struct Cli {
    /// Prompt to dispatch
    prompt: Option<String>,

    /// Force a task category instead of classifying the prompt
    #[arg(long)]
    task: Option<String>,

    /// Report per-backend availability without invoking anything
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Systematic debugging workflows
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Frontend development workflows
    Frontend {
        #[command(subcommand)]
        command: FrontendCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Analyze an error message
    Analyze {
        /// Error message
        error: String,
        /// Code file for context
        #[arg(long)]
        code: Option<String>,
    },
    /// Generate hypotheses for a bug symptom
    Hypothesis {
        /// Bug symptom description
        symptom: String,
    },
    /// Suggest debug logging for a code file
    Logging {
        /// Code file
        file: String,
    },
    /// Verify a fix
    Verify {
        /// Original issue
        issue: String,
        /// Fix description
        fix: String,
        /// Fixed code file
        file: String,
    },
}

#[derive(Subcommand)]
enum FrontendCommands {
    /// Generate a React component
    Generate {
        /// Component description
        description: String,
    },
    /// Review UI code
    Review {
        /// File to review
        file: String,
    },
    /// Get design suggestions
    Design {
        /// Design context
        context: String,
    },
    /// Convert a CSS file to Tailwind utility classes
    Tailwind {
        /// CSS file
        file: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    if cli.check {
        print_availability(&Orchestrator::new(&config));
        return Ok(());
    }

    match cli.command {
        None => {
            let Some(prompt) = cli.prompt else {
                Cli::command().print_help()?;
                return Ok(());
            };
            let category = parse_task(cli.task.as_deref())?;
            let orchestrator = Orchestrator::new(&config);
            let response = orchestrator.execute(&prompt, category).await?;
            print_response(&response);
        }
        Some(Commands::Debug { command }) => {
            let response = run_debug(command, &config).await?;
            println!("{}", response.content);
        }
        Some(Commands::Frontend { command }) => {
            let response = run_frontend(command, &config).await?;
            println!("{}", response.content);
        }
    }

    Ok(())
}

async fn run_debug(command: DebugCommands, config: &Config) -> Result<AiResponse> {
    // File arguments are read before any backend is invoked.
    let skills = SkillLibrary::new(&config.skills);
    match command {
        DebugCommands::Analyze { error, code } => {
            let code = match code {
                Some(path) => read_input_file(&path)?,
                None => String::new(),
            };
            let helper = DebugHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.analyze_error(&error, &code).await?)
        }
        DebugCommands::Hypothesis { symptom } => {
            let helper = DebugHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.generate_hypothesis(&symptom, "").await?)
        }
        DebugCommands::Logging { file } => {
            let code = read_input_file(&file)?;
            let helper = DebugHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.suggest_logging(&code).await?)
        }
        DebugCommands::Verify { issue, fix, file } => {
            let code = read_input_file(&file)?;
            let helper = DebugHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.verify_fix(&issue, &fix, &code).await?)
        }
    }
}

async fn run_frontend(command: FrontendCommands, config: &Config) -> Result<AiResponse> {
    let skills = SkillLibrary::new(&config.skills);
    match command {
        FrontendCommands::Generate { description } => {
            let helper = FrontendHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.generate_component(&description).await?)
        }
        FrontendCommands::Review { file } => {
            let code = read_input_file(&file)?;
            let helper = FrontendHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.review_ui(&code).await?)
        }
        FrontendCommands::Design { context } => {
            let helper = FrontendHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.suggest_design(&context).await?)
        }
        FrontendCommands::Tailwind { file } => {
            let css = read_input_file(&file)?;
            let helper = FrontendHelper::new(Orchestrator::new(config), &skills);
            Ok(helper.convert_to_tailwind(&css).await?)
        }
    }
}

fn parse_task(task: Option<&str>) -> Result<Option<TaskCategory>> {
    let Some(id) = task else {
        return Ok(None);
    };
    let ids: Vec<&str> = TaskCategory::ALL.iter().map(|c| c.id()).collect();
    let category = TaskCategory::from_id(id)
        .with_context(|| format!("unknown task '{}', expected one of: {}", id, ids.join(", ")))?;
    Ok(Some(category))
}

fn read_input_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read file '{path}'"))
}

fn print_response(response: &AiResponse) {
    println!("\n[Model: {}]", response.model);
    println!("{}", "-".repeat(40));
    println!("{}", response.content);
    if let Some(tokens) = response.tokens_used {
        println!("\n[Tokens used: {tokens}]");
    }
}

fn print_availability(orchestrator: &Orchestrator) {
    println!("Available Models:");
    for (name, available) in orchestrator.availability() {
        let status = if available { "✓" } else { "✗" };
        println!("  {status} {name}");
    }
}
