use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use rand_core::OsRng;
use uuid::Uuid;

use moodspace::checkin::CheckinEntry;
use moodspace::config::AppConfig;
use moodspace::forum::NewPost;
use moodspace::journal::{JournalPatch, NewJournalEntry};
use moodspace::{insights, mood, prompts, AppContext};

#[derive(Parser)]
#[command(
    name = "moodspace",
    about = "MoodSpace — local-first mood tracking, journaling, and community companion",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Data directory for the SQLite store and config.toml
    #[arg(long, env = "MOODSPACE_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MOODSPACE_LOG", global = true)]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "MOODSPACE_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Suppress informational output. Errors are still printed to stderr.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Record a mood check-in for today.
    Checkin {
        /// Mood id: radiant, hopeful, steady, tender, stormy, numb
        #[arg(long)]
        mood: String,
        /// Energy level, 1 (drained) to 5 (electric)
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
        energy: u8,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List the active user's check-in history.
    History,
    /// Delete check-in history.
    ClearHistory {
        /// Remove every user's history, not just the active user's.
        #[arg(long)]
        all: bool,
    },
    /// Journal entries.
    Journal {
        #[command(subcommand)]
        action: JournalCommand,
    },
    /// Community forum.
    Forum {
        #[command(subcommand)]
        action: ForumCommand,
    },
    /// Streak, averages, mood distribution, and insights.
    Dashboard,
    /// Create a local user record.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Drop the local user record.
    Logout,
    /// Show the active user.
    Whoami,
}

#[derive(Subcommand)]
enum JournalCommand {
    /// Write a new entry.
    Add {
        content: String,
        /// Emoji mood tag, e.g. 😊
        #[arg(long, default_value = "")]
        mood: String,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// List entries, newest first.
    List,
    /// Edit an entry's fields.
    Edit {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// Delete an entry.
    Delete { id: String },
}

#[derive(Subcommand)]
enum ForumCommand {
    /// List posts, newest first.
    List {
        /// Only show posts with this tag.
        #[arg(long)]
        tag: Option<String>,
    },
    /// Share a post (always published anonymously).
    Post {
        content: String,
        /// Emoji avatar for the post, e.g. 😊
        #[arg(long)]
        mood: Option<String>,
        /// Category tag: Support, Victory, Struggle, Question, Advice, Gratitude
        #[arg(long)]
        tag: Option<String>,
        /// Mark the post with a trigger warning.
        #[arg(long)]
        trigger_warning: bool,
    },
    /// Toggle a like on a post.
    Like { id: String },
    /// Reply to a post.
    Reply { id: String, content: String },
    /// Report a post.
    Report {
        id: String,
        #[arg(long, default_value = "unspecified")]
        reason: String,
    },
    /// List the posts you have liked.
    Liked,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::new(args.data_dir.clone(), args.log.clone());
    init_tracing(&config, args.log_file.as_deref());

    let ctx = AppContext::init(config)
        .await
        .context("failed to open the moodspace data store")?;

    match args.command {
        Command::Checkin {
            mood,
            energy,
            tags,
            notes,
        } => cmd_checkin(&ctx, args.quiet, mood, energy, tags, notes).await,
        Command::History => cmd_history(&ctx).await,
        Command::ClearHistory { all } => cmd_clear_history(&ctx, args.quiet, all).await,
        Command::Journal { action } => cmd_journal(&ctx, args.quiet, action).await,
        Command::Forum { action } => cmd_forum(&ctx, args.quiet, action).await,
        Command::Dashboard => cmd_dashboard(&ctx).await,
        Command::Login { email, name } => cmd_login(&ctx, args.quiet, &email, name.as_deref()).await,
        Command::Logout => cmd_logout(&ctx, args.quiet).await,
        Command::Whoami => cmd_whoami(&ctx).await,
    }
}

// ─── Check-ins ────────────────────────────────────────────────────────────────

async fn cmd_checkin(
    ctx: &AppContext,
    quiet: bool,
    mood_id: String,
    energy: u8,
    tags: Vec<String>,
    notes: String,
) -> Result<()> {
    let Some(mood) = mood::mood_by_id(&mood_id) else {
        let known: Vec<&str> = mood::MOODS.iter().map(|m| m.id).collect();
        anyhow::bail!("unknown mood '{mood_id}' — expected one of: {}", known.join(", "));
    };

    let user = ctx.session.active_user_id().await;
    let history = ctx.checkins.load(Some(&user)).await;

    let mut rng = OsRng;
    let prompt_set = prompts::build_prompt_set(&mood_id, &history, &mut rng);
    let actions = prompts::suggest_micro_actions(&mood_id, energy);

    let entry = CheckinEntry {
        id: Uuid::new_v4().to_string(),
        mood_id: mood_id.clone(),
        energy,
        tags,
        notes,
        prompt: prompt_set.first().cloned().unwrap_or_default(),
        suggested_actions: actions.clone(),
        date: Utc::now().to_rfc3339(),
    };

    let mut updated = history;
    updated.push(entry);
    ctx.checkins.persist(&user, &updated).await;

    if !quiet {
        println!(
            "Checked in: {} {} — energy {} ({})",
            mood.emoji,
            mood.label,
            energy,
            mood::energy_label(energy)
        );
        if !prompt_set.is_empty() {
            println!("\nReflection prompts:");
            for prompt in &prompt_set {
                println!("  • {prompt}");
            }
        }
        println!("\nMicro-actions:");
        for action in &actions {
            println!("  • {action}");
        }
    }
    Ok(())
}

async fn cmd_history(ctx: &AppContext) -> Result<()> {
    let user = ctx.session.active_user_id().await;
    let entries = ctx.checkins.load(Some(&user)).await;
    if entries.is_empty() {
        println!("No check-ins yet.");
        return Ok(());
    }
    for entry in entries.iter().rev() {
        let label = mood::mood_by_id(&entry.mood_id)
            .map(|m| format!("{} {}", m.emoji, m.label))
            .unwrap_or_else(|| entry.mood_id.clone());
        println!("{}  {}  energy {}  {}", entry.date, label, entry.energy, entry.notes);
    }
    Ok(())
}

async fn cmd_clear_history(ctx: &AppContext, quiet: bool, all: bool) -> Result<()> {
    if all {
        ctx.checkins.clear(None).await;
    } else {
        let user = ctx.session.active_user_id().await;
        ctx.checkins.clear(Some(&user)).await;
    }
    if !quiet {
        println!("Check-in history cleared.");
    }
    Ok(())
}

// ─── Journal ──────────────────────────────────────────────────────────────────

async fn cmd_journal(ctx: &AppContext, quiet: bool, action: JournalCommand) -> Result<()> {
    let user = ctx.session.active_user_id().await;
    match action {
        JournalCommand::Add { content, mood, tags } => {
            let draft = NewJournalEntry {
                content,
                mood,
                tags,
                ..Default::default()
            };
            let entry = ctx
                .journal
                .save(draft, &user)
                .await
                .context("could not save the journal entry")?;
            if !quiet {
                println!("Saved entry {}", entry.id);
            }
        }
        JournalCommand::List => {
            let entries = ctx.journal.load(&user).await;
            if entries.is_empty() {
                println!("No journal entries yet.");
            }
            for entry in entries {
                println!("{}  {}  [{}]", entry.id, entry.timestamp, entry.tags.join(", "));
                println!("  {} {}", entry.mood, entry.content);
            }
        }
        JournalCommand::Edit {
            id,
            content,
            mood,
            tags,
        } => {
            let patch = JournalPatch {
                content,
                mood,
                tags,
                ai_prompt: None,
            };
            match ctx.journal.update(&id, patch, &user).await {
                Some(entry) => {
                    if !quiet {
                        println!("Updated entry {}", entry.id);
                    }
                }
                None => anyhow::bail!("no journal entry with id {id}"),
            }
        }
        JournalCommand::Delete { id } => {
            if ctx.journal.delete(&id, &user).await {
                if !quiet {
                    println!("Deleted entry {id}");
                }
            } else {
                anyhow::bail!("no journal entry with id {id}");
            }
        }
    }
    Ok(())
}

// ─── Forum ────────────────────────────────────────────────────────────────────

async fn cmd_forum(ctx: &AppContext, quiet: bool, action: ForumCommand) -> Result<()> {
    let user = ctx.session.active_user_id().await;
    match action {
        ForumCommand::List { tag } => {
            let posts = ctx.forum.load_posts().await;
            for post in posts
                .iter()
                .filter(|post| tag.is_none() || post.tag == tag)
            {
                let warning = if post.trigger_warning { "  ⚠ TW" } else { "" };
                let tag_badge = post
                    .tag
                    .as_ref()
                    .map(|tag| format!("  [{tag}]"))
                    .unwrap_or_default();
                println!("{}  ♥{}{}{}", post.id, post.likes, tag_badge, warning);
                println!("  {}: {}", post.author, post.content);
                for reply in &post.replies {
                    println!("    ↳ {}: {}", reply.author, reply.content);
                }
            }
        }
        ForumCommand::Post {
            content,
            mood,
            tag,
            trigger_warning,
        } => {
            let post = ctx
                .forum
                .create_post(
                    NewPost {
                        content,
                        mood,
                        tag,
                        trigger_warning,
                    },
                    &user,
                )
                .await
                .context("could not publish the post")?;
            if !quiet {
                println!("Posted anonymously as {}", post.id);
            }
        }
        ForumCommand::Like { id } => {
            let outcome = ctx.forum.like_post(&id, &user).await?;
            if !quiet {
                let verb = if outcome.liked { "Liked" } else { "Unliked" };
                println!("{verb} {id} — now at ♥{}", outcome.likes);
            }
        }
        ForumCommand::Reply { id, content } => {
            let reply = ctx.forum.reply_to_post(&id, &content, &user).await?;
            if !quiet {
                println!("Replied as {}", reply.id);
            }
        }
        ForumCommand::Report { id, reason } => {
            ctx.forum.report_post(&id, &reason, &user).await;
            if !quiet {
                println!("Report received. Thank you for keeping the space safe.");
            }
        }
        ForumCommand::Liked => {
            for id in ctx.forum.user_liked_post_ids(&user).await {
                println!("{id}");
            }
        }
    }
    Ok(())
}

// ─── Dashboard ────────────────────────────────────────────────────────────────

async fn cmd_dashboard(ctx: &AppContext) -> Result<()> {
    let user = ctx.session.active_user_id().await;
    let entries = ctx.checkins.load(Some(&user)).await;
    let today = Local::now().date_naive();
    let summary = insights::summary(&entries, today);

    println!("Check-ins: {}", summary.total_checkins);
    println!("Streak:    {} day(s)", summary.streak);
    println!("Average:   {:.1}", summary.average_mood);

    if !summary.distribution.is_empty() {
        println!("\nMood distribution:");
        for bucket in &summary.distribution {
            println!("  {:<9} {}", bucket.spectrum.label(), bucket.count);
        }
    }

    println!("\nLast 7 days:");
    for point in &summary.trend {
        println!("  {}  {}  score {}", point.date, point.emoji, point.score);
    }

    println!("\nInsights:");
    for insight in &summary.insights {
        println!("  • {insight}");
    }
    Ok(())
}

// ─── Session ──────────────────────────────────────────────────────────────────

async fn cmd_login(ctx: &AppContext, quiet: bool, email: &str, name: Option<&str>) -> Result<()> {
    let user = ctx.session.login(email, name).await?;
    if !quiet {
        println!("Signed in as {} <{}>", user.name, user.email);
    }
    Ok(())
}

async fn cmd_logout(ctx: &AppContext, quiet: bool) -> Result<()> {
    ctx.session.logout().await;
    if !quiet {
        println!("Signed out.");
    }
    Ok(())
}

async fn cmd_whoami(ctx: &AppContext) -> Result<()> {
    match ctx.session.current().await {
        Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
        None => println!(
            "Anonymous session (guest id '{}')",
            ctx.config.guest_user_id
        ),
    }
    Ok(())
}

// ─── Logging ──────────────────────────────────────────────────────────────────

fn init_tracing(config: &AppConfig, log_file: Option<&Path>) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    if let Some(path) = log_file {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let prefix = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "moodspace.log".to_string());
        let appender = tracing_appender::rolling::daily(dir, prefix);
        if config.log_format == "json" {
            tracing_subscriber::registry()
                .with(EnvFilter::new(&config.log))
                .with(fmt::layer().json().with_writer(appender).with_ansi(false))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(&config.log))
                .with(fmt::layer().compact().with_writer(appender).with_ansi(false))
                .init();
        }
    } else if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(config.log.as_str())
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.as_str())
            .compact()
            .init();
    }
}
