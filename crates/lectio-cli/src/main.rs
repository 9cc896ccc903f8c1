//! Lectio CLI - Daily reading subscription management
//!
//! Simple CLI for the Lectio API: register, adjust preferences,
//! trigger a delivery and confirm readings.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use uuid::Uuid;

use api::{LectioClient, RegisterRequest, UpdateRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Lectio CLI - Daily reading subscription management", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new subscription
    Register {
        /// Full name (will prompt if not provided)
        #[arg(long)]
        name: Option<String>,
        /// Phone number in international format, e.g. "+5511999999999"
        #[arg(long)]
        phone: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Bible version code (ARC, NVI, ACF)
        #[arg(short, long)]
        version: Option<String>,
        /// Reading plan code (cronologico, livros)
        #[arg(short, long)]
        plan: Option<String>,
        /// Preferred delivery time as "HH:MM"
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Log in and store a session token
    Login {
        /// Phone number (will prompt if not provided)
        #[arg(long)]
        phone: Option<String>,
    },

    /// Show the logged-in user's profile
    Me,

    /// Update delivery preferences
    Set {
        /// Bible version code (ARC, NVI, ACF)
        #[arg(short, long)]
        version: Option<String>,
        /// Reading plan code (cronologico, livros)
        #[arg(short, long)]
        plan: Option<String>,
        /// Reading order (normal, alternado)
        #[arg(short, long)]
        order: Option<String>,
        /// Preferred delivery time as "HH:MM"
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Deliver today's reading now
    Deliver {
        /// Deliver to another user by phone instead of the session user
        #[arg(long)]
        phone: Option<String>,
    },

    /// Show reading history and completion stats
    History {
        /// Max readings to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Confirm a reading as completed
    Confirm {
        /// Reading ID
        reading_id: Uuid,
    },

    /// List available versions and plans
    Catalog,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Register {
            name,
            phone,
            email,
            version,
            plan,
            time,
        } => cmd_register(name, phone, email, version, plan, time).await,
        Commands::Login { phone } => cmd_login(phone).await,
        Commands::Me => cmd_me().await,
        Commands::Set {
            version,
            plan,
            order,
            time,
        } => cmd_set(version, plan, order, time).await,
        Commands::Deliver { phone } => cmd_deliver(phone).await,
        Commands::History { limit } => cmd_history(limit).await,
        Commands::Confirm { reading_id } => cmd_confirm(reading_id).await,
        Commands::Catalog => cmd_catalog().await,
        Commands::Config => cmd_config(),
    }
}

/// Client for routes that need no session
fn public_client(config: &Config) -> LectioClient {
    LectioClient::new(&config.base_url, None)
}

/// Client plus user id for routes behind the session middleware
fn session_client(config: &Config) -> Result<(LectioClient, Uuid)> {
    let (token, user_id) = config
        .session()
        .context("Not logged in. Run 'lectio login' first.")?;
    Ok((LectioClient::new(&config.base_url, Some(token)), user_id))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_register(
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    version: Option<String>,
    plan: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let client = public_client(&config);

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Name")
            .interact_text()
            .context("Failed to read name")?,
    };
    let phone = match phone {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Phone (international format)")
            .interact_text()
            .context("Failed to read phone")?,
    };
    let password: String = Password::new()
        .with_prompt("Password (empty to skip)")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password")?;

    let request = RegisterRequest {
        name,
        phone,
        email,
        password: Some(password).filter(|p| !p.is_empty()),
        version,
        plan,
        reading_order: None,
        delivery_time: time,
    };

    let user = client.register(&request).await?;

    println!(
        "{} Registered {} ({})",
        "✓".green(),
        user.name.cyan(),
        user.phone
    );
    println!(
        "  {} {} | {} {} | {} {}",
        "version:".dimmed(),
        user.version,
        "plan:".dimmed(),
        user.plan,
        "delivery:".dimmed(),
        user.delivery_time
    );
    println!("\n{}", "Log in to manage your subscription:".dimmed());
    println!("  lectio login --phone {}", user.phone);

    Ok(())
}

async fn cmd_login(phone: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    let client = public_client(&config);

    let phone = match phone {
        Some(p) => p,
        None => Input::new()
            .with_prompt("Phone")
            .interact_text()
            .context("Failed to read phone")?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;

    print!("Testing connection... ");
    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach the Lectio API at {}", config.base_url);
        }
    }

    let session = client.login(&phone, &password).await?;
    config.set_session(session.token, session.user_id);
    config.save()?;

    println!(
        "{} Logged in, session saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

async fn cmd_me() -> Result<()> {
    let config = Config::load()?;
    let (client, user_id) = session_client(&config)?;

    let user = client.get_user(user_id).await?;

    println!("{}", user.name.cyan().bold());
    println!("  {} {}", "phone:".dimmed(), user.phone);
    if let Some(email) = &user.email {
        println!("  {} {}", "email:".dimmed(), email);
    }
    println!("  {} {}", "version:".dimmed(), user.version);
    println!("  {} {}", "plan:".dimmed(), user.plan);
    println!("  {} {}", "order:".dimmed(), user.reading_order);
    println!("  {} {}", "delivery:".dimmed(), user.delivery_time);

    Ok(())
}

async fn cmd_set(
    version: Option<String>,
    plan: Option<String>,
    order: Option<String>,
    time: Option<String>,
) -> Result<()> {
    if version.is_none() && plan.is_none() && order.is_none() && time.is_none() {
        bail!("Nothing to update. Pass at least one of --version, --plan, --order, --time.");
    }

    let config = Config::load()?;
    let (client, user_id) = session_client(&config)?;

    let request = UpdateRequest {
        name: None,
        email: None,
        version,
        plan,
        reading_order: order,
        delivery_time: time,
    };
    let user = client.update_user(user_id, &request).await?;

    println!(
        "{} Preferences updated: {} | {} | {} | {}",
        "✓".green(),
        user.version,
        user.plan,
        user.reading_order,
        user.delivery_time
    );

    Ok(())
}

async fn cmd_deliver(phone: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let (client, user_id) = match phone {
        // Resolving someone else by phone still needs a session.
        Some(phone) => {
            let (client, _) = session_client(&config)?;
            let user = client.get_user_by_phone(&phone).await?;
            (client, user.id)
        }
        None => session_client(&config)?,
    };

    let outcome = client.deliver(user_id).await?;

    let dedup = if outcome.reused { "reused pending" } else { "new" };
    println!(
        "{} {} ({})",
        "✓".green(),
        outcome.reference.cyan().bold(),
        dedup.dimmed()
    );
    if outcome.dispatched {
        println!("  {} message handed to the relay", "→".green());
    } else {
        println!(
            "  {} dispatch failed; the reading stays pending and will retry",
            "!".yellow()
        );
    }
    println!("\n{}", truncate_string(&outcome.text, 200).dimmed());
    println!("\n{}", "Confirm once read:".dimmed());
    println!("  lectio confirm {}", outcome.reading_id);

    Ok(())
}

async fn cmd_history(limit: usize) -> Result<()> {
    let config = Config::load()?;
    let (client, user_id) = session_client(&config)?;

    let history = client.history(user_id).await?;

    if history.readings.is_empty() {
        println!("No readings yet. Trigger one with 'lectio deliver'.");
        return Ok(());
    }

    println!(
        "{} readings, {} completed, {} pending:",
        history.total.to_string().bold(),
        history.completed.to_string().green(),
        history.pending.to_string().yellow()
    );

    for reading in history.readings.iter().take(limit) {
        let status = if reading.completed {
            "✓".green()
        } else {
            "·".yellow()
        };
        println!(
            "  {} {} {} {}",
            status,
            reading.assigned_on.dimmed(),
            reading.reference.cyan(),
            reading.id.to_string().dimmed()
        );
    }

    if history.total > limit {
        println!("  {} ({} more)", "…".dimmed(), history.total - limit);
    }

    Ok(())
}

async fn cmd_confirm(reading_id: Uuid) -> Result<()> {
    let config = Config::load()?;
    let client = public_client(&config);

    let confirmed = client.confirm(reading_id).await?;

    println!("{} {}", "✓".green(), confirmed.message);

    Ok(())
}

async fn cmd_catalog() -> Result<()> {
    let config = Config::load()?;
    let client = public_client(&config);

    let versions = client.versions().await?;
    println!("{}", "Versions:".bold());
    for version in versions {
        println!("  {} {}", version.code.cyan(), version.name.dimmed());
    }

    let plans = client.plans().await?;
    println!("\n{}", "Plans:".bold());
    for plan in plans {
        println!(
            "  {} {} - {}",
            plan.code.cyan(),
            plan.name,
            plan.description.dimmed()
        );
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  Session: {}",
        if config.session().is_some() {
            "Logged in".green()
        } else {
            "Not logged in".red()
        }
    );
    if let Some(user_id) = config.user_id {
        println!("  User: {}", user_id.to_string().dimmed());
    }

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
