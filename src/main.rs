use academia_repo::config::AppConfig;
use academia_repo::models::UserRole;
use academia_repo::services::summarizer::create_summarizer;
use academia_repo::services::upload::UploadService;
use academia_repo::store::AppShell;
use academia_repo::views::{self, notifications, professor, profile, student};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "academia-repo", about = "Academic document repository shell")]
struct Args {
    /// Sign in as this role immediately instead of showing the login screen
    #[arg(long, value_parser = parse_role)]
    role: Option<UserRole>,

    /// Disable the summarization call; uploads get the placeholder summary
    #[arg(long)]
    no_ai: bool,
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    match s.to_lowercase().as_str() {
        "student" => Ok(UserRole::Student),
        "professor" => Ok(UserRole::Professor),
        other => Err(format!("unknown role '{}', expected student or professor", other)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academia_repo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if args.no_ai {
        config.summarizer_kind = "noop".to_string();
    }
    info!(
        "🚀 Starting AcademiaRepo (summarizer={}, model={})",
        config.summarizer_kind, config.gemini_model
    );

    let summarizer = create_summarizer(&config);
    let uploads = UploadService::new(summarizer);

    let mut shell = AppShell::seeded();
    if let Some(role) = args.role {
        shell.login(role);
    }

    loop {
        if shell.current_user().is_none() {
            match views::login::run()? {
                Some(role) => {
                    shell.login(role);
                }
                None => break,
            }
            continue;
        }

        let user = shell
            .current_user()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no signed-in user"))?;
        let unread = shell.unread_count();
        println!(
            "\n{} ({}) | notifications: {} unread",
            user.name, user.role, unread
        );
        println!("Menu: docs | notifications | profile | logout | quit");

        let choice = views::prompt("menu", "docs")?;
        match choice.trim() {
            "docs" | "" => match user.role {
                UserRole::Student => {
                    student::StudentDashboard::new()
                        .run(&mut shell, &uploads)
                        .await?
                }
                UserRole::Professor => {
                    professor::ProfessorDashboard::new()
                        .run(&mut shell, &uploads)
                        .await?
                }
            },
            "notifications" | "n" => notifications::run(&mut shell)?,
            "profile" => profile::run(&shell),
            "logout" => shell.logout(),
            "quit" | "q" | "exit" => break,
            other => println!("Unknown choice '{}'.", other),
        }
    }

    info!("👋 Session ended.");
    Ok(())
}
