use campusdesk_cli::admin::create_admin;
use campusdesk_cli::seeder::{self, SeedConfig};
use campusdesk_config::PortalConfig;
use campusdesk_db::{DatabaseConfig, PgPool, init_db_pool, run_migrations};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "campusdesk-cli")]
#[command(about = "CampusDesk CLI - Administrative tools for the college portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a portal administrator account
    CreateAdmin {
        /// Login name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed sample timetable, exam, course and seating records
    Seed {
        /// Number of semesters to generate
        #[arg(short = 's', long, default_value = "4")]
        semesters: i32,

        /// Branch codes (branch_section mode)
        #[arg(long, value_delimiter = ',', default_value = "CSE,ECE")]
        branches: Vec<String>,

        /// Section letters (branch_section mode)
        #[arg(long, value_delimiter = ',', default_value = "A,B")]
        sections: Vec<String>,
    },
    /// Delete all portal records (keeps admin accounts)
    Clear,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateAdmin { username, password } => {
            handle_create_admin(&pool, username, password).await
        }
        Commands::Seed {
            semesters,
            branches,
            sections,
        } => handle_seed(&pool, semesters, branches, sections).await,
        Commands::Clear => handle_clear(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    init_db_pool(&config).await
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_create_admin(
    pool: &PgPool,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let id = create_admin(pool, &username, &password).await?;

    println!("\n✅ Admin created successfully!");
    println!("   Username: {}", username.trim());
    println!("   ID: {}", id);
    Ok(())
}

async fn handle_seed(
    pool: &PgPool,
    semesters: i32,
    branches: Vec<String>,
    sections: Vec<String>,
) -> anyhow::Result<()> {
    if semesters < 1 {
        anyhow::bail!("--semesters must be at least 1");
    }

    let mode = PortalConfig::from_env()
        .map_err(anyhow::Error::msg)?
        .selection_mode;
    let config = SeedConfig::new(mode)
        .with_semesters(semesters)
        .with_branches(branches)
        .with_sections(sections);

    seeder::seed_all(pool, &config).await?;
    Ok(())
}

async fn handle_clear(pool: &PgPool) -> anyhow::Result<()> {
    seeder::clear_all(pool).await?;
    Ok(())
}
