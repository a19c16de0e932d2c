use clap::{Parser, Subcommand};
use staffing_cli::{commands, OutputFormat, PayloadArgs};
use staffing_config::{resolve_base_url, API_BASE_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
use staffing_core::EntityId;
use staffing_mirror::init_session;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Root URL of the staffing backend
    #[arg(long, global = true, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Employee directory
    Employees {
        #[command(subcommand)]
        command: EmployeeCommands,
    },
    /// Project catalogue
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Project staffing
    Assignments {
        #[command(subcommand)]
        command: AssignmentCommands,
    },
}

#[derive(Subcommand)]
enum EmployeeCommands {
    List,
    /// Id and names only
    Basic,
    Page {
        #[arg(long, default_value_t = 0, help = "Zero-based page index")]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    Add {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    #[command(name = "add-bulk")]
    AddBulk {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    Terminate {
        id: EntityId,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    List,
    Add {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    Terminate {
        id: EntityId,
    },
}

#[derive(Subcommand)]
enum AssignmentCommands {
    List {
        #[arg(long, conflicts_with = "employee")]
        project: Option<EntityId>,
        #[arg(long)]
        employee: Option<EntityId>,
    },
    Add {
        #[command(flatten)]
        payload: PayloadArgs,
    },
    Terminate {
        id: EntityId,
    },
    Assign {
        project: EntityId,
        employee: EntityId,
    },
    Unassign {
        project: EntityId,
        employee: EntityId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let session = init_session(&resolve_base_url(Some(&cli.base_url)))?;
    let format = cli.format;

    match cli.command {
        Commands::Employees { command } => match command {
            EmployeeCommands::List => {
                commands::cmd_employees_list(session, format).await?;
            }
            EmployeeCommands::Basic => {
                commands::cmd_employees_basic(session, format).await?;
            }
            EmployeeCommands::Page { page, size } => {
                commands::cmd_employees_page(session, page, size, format).await?;
            }
            EmployeeCommands::Add { payload } => {
                let payload = commands::read_payload(&payload)?;
                commands::cmd_employees_add(session, payload).await?;
            }
            EmployeeCommands::AddBulk { payload } => {
                let payload = commands::read_payload(&payload)?;
                commands::cmd_employees_add_bulk(session, payload).await?;
            }
            EmployeeCommands::Terminate { id } => {
                commands::cmd_employees_terminate(session, id).await?
            }
        },
        Commands::Projects { command } => match command {
            ProjectCommands::List => {
                commands::cmd_projects_list(session, format).await?;
            }
            ProjectCommands::Add { payload } => {
                let payload = commands::read_payload(&payload)?;
                commands::cmd_projects_add(session, payload).await?;
            }
            ProjectCommands::Terminate { id } => {
                commands::cmd_projects_terminate(session, id).await?
            }
        },
        Commands::Assignments { command } => match command {
            AssignmentCommands::List { project, employee } => {
                commands::cmd_assignments_list(session, project, employee, format).await?;
            }
            AssignmentCommands::Add { payload } => {
                let payload = commands::read_payload(&payload)?;
                commands::cmd_assignments_add(session, payload).await?;
            }
            AssignmentCommands::Terminate { id } => {
                commands::cmd_assignments_terminate(session, id).await?
            }
            AssignmentCommands::Assign { project, employee } => {
                commands::cmd_assign(session, project, employee, format).await?;
            }
            AssignmentCommands::Unassign { project, employee } => {
                commands::cmd_unassign(session, project, employee, format).await?;
            }
        },
    }

    Ok(())
}
