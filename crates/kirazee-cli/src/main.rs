use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;
use kirazee_cli::{accounts, seeder};
use kirazee_core::Role;
use sqlx::SqlitePool;

#[derive(Parser)]
#[command(name = "kirazee-cli")]
#[command(about = "Kirazee CLI - Administrative tools for the Kirazee dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a dashboard user
    CreateUser {
        /// Username (3-50 letters, digits, `_` or `-`)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role, e.g. super_admin or kyc_associate (will be prompted if not provided)
        #[arg(short = 'r', long)]
        role: Option<String>,
    },
    /// Create or reset the sample accounts for every role
    Seed,
    /// Seed random users
    SeedFake {
        /// Number of users to create
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,
    },
    /// Deactivate a user so they can no longer log in
    DeactivateUser {
        #[arg(short = 'u', long)]
        username: String,
    },
    /// Print the role-permission table
    Roles,
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Roles = cli.command {
        print!("{}", accounts::role_table());
        return;
    }

    let pool = match kirazee_db::init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    };

    match cli.command {
        Commands::CreateUser {
            username,
            password,
            role,
        } => handle_create_user(&pool, username, password, role).await,
        Commands::Seed => handle_seed(&pool).await,
        Commands::SeedFake { count } => handle_seed_fake(&pool, count).await,
        Commands::DeactivateUser { username } => handle_deactivate_user(&pool, &username).await,
        Commands::Roles => {}
    }
}

fn prompt_role() -> Result<String, dialoguer::Error> {
    let labels: Vec<String> = Role::ALL
        .iter()
        .map(|r| format!("{} ({})", r.display_name(), r.as_str()))
        .collect();

    let index = Select::new()
        .with_prompt("Role")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Role::ALL[index].as_str().to_string())
}

async fn handle_create_user(
    pool: &SqlitePool,
    username: Option<String>,
    password: Option<String>,
    role: Option<String>,
) {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .unwrap_or_else(|e| fail("Failed to read username", e)),
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .unwrap_or_else(|e| fail("Failed to read password", e)),
    };

    let role = match role {
        Some(role) => role,
        None => prompt_role().unwrap_or_else(|e| fail("Failed to read role", e)),
    };

    match accounts::create_user(pool, &username, &password, &role).await {
        Ok(id) => {
            println!("\n✅ User created successfully!");
            println!("   ID: {}", id);
            println!("   Username: {}", username.trim());
            println!("   Role: {}", role);
        }
        Err(e) => fail("Error creating user", e),
    }
}

async fn handle_seed(pool: &SqlitePool) {
    match seeder::seed_sample_users(pool).await {
        Ok(summary) => {
            println!("\n✅ Seeding complete!");
            println!("   - Created: {} users", summary.created);
            println!("   - Updated: {} users", summary.updated);
            println!("   - Total: {} users", summary.total());
        }
        Err(e) => fail("Error seeding database", e),
    }
}

async fn handle_seed_fake(pool: &SqlitePool, count: usize) {
    match seeder::seed_fake_users(pool, count).await {
        Ok(inserted) => println!("✅ Created {} users", inserted),
        Err(e) => fail("Error seeding fake users", e),
    }
}

async fn handle_deactivate_user(pool: &SqlitePool, username: &str) {
    match accounts::deactivate_user(pool, username).await {
        Ok(()) => println!("✅ Deactivated {}", username.trim()),
        Err(e) => fail("Error deactivating user", e),
    }
}
