use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::Parser;
use love_connect::config::cli::{CardAction, Command, MemoryAction, PhotoAction, PlannerAction};
use love_connect::core::countdown::{countdown, countdown_now};
use love_connect::core::memories::format_memory_date;
use love_connect::core::photos::upload_photo_file;
use love_connect::utils::error::ErrorSeverity;
use love_connect::utils::{logger, validation::Validate};
use love_connect::{
    score, AppConfig, CardService, CardTheme, CliConfig, CompatibilityResult, CountdownResult,
    JsonFileStore, LoveCard, LoveError, MemoryService, Planner, RestRepository,
};
use std::io::Write;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入配置（檔案不存在時使用預設值）
    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config.display(), e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.json_logs || config.logging.json {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,      // 查無資料
            ErrorSeverity::Medium => 2,   // 可重試
            ErrorSeverity::High => 1,     // 輸入或處理錯誤
            ErrorSeverity::Critical => 3, // 配置錯誤
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> love_connect::Result<()> {
    match command {
        Command::Score { name_a, name_b } => {
            let result = score(&name_a, &name_b)?;
            print_score(&name_a, &name_b, &result);
        }
        Command::Countdown { at, watch } => {
            if watch {
                watch_countdown().await?;
            } else {
                let result = match at {
                    Some(at) => countdown(local_instant(at)?),
                    None => countdown_now(),
                };
                println!("{}", format_countdown(&result));
            }
        }
        Command::Planner { action } => {
            let store = JsonFileStore::new(&config.planner.state_file);
            run_planner(action, Planner::load(store).await?).await?;
        }
        Command::Card { action } => {
            run_card(action, CardService::new(remote_repository(config)?)).await?;
        }
        Command::Memory { action } => {
            run_memory(action, MemoryService::new(remote_repository(config)?)).await?;
        }
        Command::Photo {
            action: PhotoAction::Upload { path },
        } => {
            let url = upload_photo_file(&remote_repository(config)?, &path).await?;
            println!("📷 {}", url);
        }
    }
    Ok(())
}

/// `--at` is read as local wall-clock time.
fn local_instant(at: NaiveDateTime) -> love_connect::Result<DateTime<Local>> {
    Local.from_local_datetime(&at).earliest().ok_or_else(|| {
        LoveError::invalid_input("at", format!("{} does not exist in the local time zone", at))
    })
}

fn remote_repository(config: &AppConfig) -> love_connect::Result<RestRepository> {
    let remote = config.remote()?;
    tracing::debug!("Using remote backend at {}", remote.url);
    RestRepository::from_config(remote)
}

fn print_score(name_a: &str, name_b: &str, result: &CompatibilityResult) {
    println!("{} 💕 {}", name_a, name_b);
    println!("{} {}%  {}", result.tier.emoji(), result.score, result.tier);
    println!("{}", result.message());
}

fn format_countdown(result: &CountdownResult) -> String {
    if result.is_target_day {
        return "💕 Happy Valentine's Day! Wishing you a day filled with love and joy!"
            .to_string();
    }
    format!(
        "⏳ {:02} days {:02} hours {:02} minutes {:02} seconds until {}",
        result.days,
        result.hours,
        result.minutes,
        result.seconds,
        result.target.format("%b %-d, %Y")
    )
}

async fn watch_countdown() -> love_connect::Result<()> {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut stdout = std::io::stdout();
                write!(stdout, "\r\x1b[2K{}", format_countdown(&countdown_now()))?;
                stdout.flush()?;
            }
            _ = &mut ctrl_c => {
                println!();
                tracing::debug!("Countdown interrupted");
                return Ok(());
            }
        }
    }
}

async fn run_planner(
    action: PlannerAction,
    mut planner: Planner<JsonFileStore>,
) -> love_connect::Result<()> {
    match action {
        PlannerAction::List => {
            let (done, total) = planner.progress();
            println!("📅 Valentine week: {} of {} days completed", done, total);
            for day in planner.days() {
                let mark = if planner.is_completed(day.name) { "✅" } else { "⬜" };
                println!("{} {} ({}) - {}", mark, day.name, day.date, day.suggestion);
                if let Some(note) = planner.note(day.name) {
                    println!("    📝 {}", note);
                }
            }
        }
        PlannerAction::Toggle { day } => {
            let completed = planner.toggle_complete(&day).await?;
            let (done, total) = planner.progress();
            let status = if completed { "done" } else { "not done" };
            println!("{} marked {} ({} of {} days completed)", day, status, done, total);
        }
        PlannerAction::Note { day, text } => {
            planner.save_note(&day, &text).await?;
            println!("📝 Note saved");
        }
        PlannerAction::Template { day } => {
            let template = planner.use_template(&day).await?;
            println!("📝 {}", template);
        }
    }
    Ok(())
}

fn print_card(card: &LoveCard) {
    println!("{} To {} {}", card.theme.pattern(), card.partner_name, card.theme.pattern());
    println!("{}", card.message);
    if let Some(photo) = &card.photo_url {
        println!("📷 {}", photo);
    }
    println!("🔗 Share code: {} ({} theme)", card.share_code, card.theme);
}

async fn run_card(
    action: CardAction,
    cards: CardService<RestRepository>,
) -> love_connect::Result<()> {
    match action {
        CardAction::Create {
            partner,
            message,
            theme,
            photo,
        } => {
            let theme: CardTheme = theme.parse()?;
            let card = cards
                .create_card(&partner, &message, theme, photo.as_deref())
                .await?;
            print_card(&card);
        }
        CardAction::Show { share_code } => {
            print_card(&cards.get_card(&share_code).await?);
        }
    }
    Ok(())
}

async fn run_memory(
    action: MemoryAction,
    memories: MemoryService<RestRepository>,
) -> love_connect::Result<()> {
    match action {
        MemoryAction::List => {
            let all = memories.list().await?;
            if all.is_empty() {
                println!("No memories yet");
            }
            for memory in all {
                println!(
                    "💞 {} - {} [{}]",
                    format_memory_date(memory.memory_date),
                    memory.title,
                    memory.id
                );
                println!("   {}", memory.description);
                if let Some(photo) = &memory.photo_url {
                    println!("   📷 {}", photo);
                }
            }
        }
        MemoryAction::Add {
            title,
            description,
            date,
            photo,
        } => {
            let memory = memories
                .create(&title, &description, &date, photo.as_deref())
                .await?;
            println!("💾 Saved memory {} ({})", memory.title, memory.id);
        }
        MemoryAction::Delete { id } => {
            memories.delete(&id).await?;
            println!("🗑️ Deleted memory {}", id);
        }
    }
    Ok(())
}
