pub mod board;
pub mod init;
pub mod item;
pub mod pause;
pub mod resume;
pub mod start;
pub mod status;
pub mod stop;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Create and list work items")]
    Item(item::ItemArgs),
    #[command(about = "Start a timer on a work item", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Pause a running timer", arg_required_else_help = true)]
    Pause(pause::PauseArgs),
    #[command(about = "Resume a paused timer", arg_required_else_help = true)]
    Resume(resume::ResumeArgs),
    #[command(about = "Stop a timer and record the duration", arg_required_else_help = true)]
    Stop(stop::StopArgs),
    #[command(about = "Show open timers with elapsed time")]
    Status,
    #[command(about = "Show the shift board for a viewing date")]
    Board(board::BoardArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Item(args) => item::cmd(args),
            Commands::Start(args) => start::cmd(args),
            Commands::Pause(args) => pause::cmd(args),
            Commands::Resume(args) => resume::cmd(args),
            Commands::Stop(args) => stop::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Board(args) => board::cmd(args),
        }
    }
}
