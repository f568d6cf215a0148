mod access;
mod app;
mod config;
mod input;
mod models;
mod probe;
mod ui;
mod util;

use access::Access;
use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dspace", about = "single-screen storage gauge for one mount point", version = "0.1")]
struct Cli {
    /// Mount point to measure (defaults to the configured mount point)
    path: Option<PathBuf>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print a one-shot JSON snapshot and exit
    #[arg(long)]
    json: bool,

    /// One-shot usage check: exit 0=OK, 1=WARNING, 2=CRITICAL (nagios/cron compatible)
    #[arg(long)]
    check: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load();

    let mount = cli.path
        .unwrap_or_else(|| PathBuf::from(&cfg.general.mount_point));

    if cli.json {
        return run_json_snapshot(&mount);
    }
    if cli.check {
        return run_check(&mount, &cfg);
    }
    if cli.config {
        return run_print_config(&cfg);
    }

    let theme_name    = cli.theme.unwrap_or_else(|| cfg.general.theme.clone());
    let initial_theme = ui::theme::ThemeVariant::from_name(&theme_name);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(mount, initial_theme, cfg);
    restore_terminal()?;
    result
}

fn run_json_snapshot(mount: &Path) -> Result<()> {
    use serde_json::json;
    use util::human::format_size;

    let grant = match access::request(mount) {
        Access::Authorized(g) => g,
        Access::Unauthorized  => anyhow::bail!("no read access to {}", mount.display()),
    };
    let snap = probe::read_snapshot(&grant)?;

    let out = json!({
        "dspace_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "mount":     mount.display().to_string(),
        "total":     snap.total_bytes,
        "used":      snap.used_bytes,
        "free":      snap.free_bytes,
        "total_hr":  format_size(snap.total_bytes),
        "used_hr":   format_size(snap.used_bytes),
        "free_hr":   format_size(snap.free_bytes),
        "use_pct":   snap.used_pct(),
    });

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_check(mount: &Path, cfg: &Config) -> Result<()> {
    use util::human::format_size;

    let snap = match access::request(mount) {
        Access::Authorized(g) => probe::read_snapshot(&g),
        Access::Unauthorized  => Err(anyhow::anyhow!("no read access")),
    };

    let snap = match snap {
        Ok(s) => s,
        Err(e) => {
            println!("CRITICAL — {} unavailable: {}", mount.display(), e);
            std::process::exit(2);
        }
    };

    let pct = snap.used_pct();
    let summary = format!(
        "{} — {:.0}% used, {} of {} ({} free)",
        mount.display(), pct,
        format_size(snap.used_bytes), format_size(snap.total_bytes),
        format_size(snap.free_bytes),
    );

    if pct >= cfg.thresholds.crit_pct {
        println!("CRITICAL — {}", summary);
        std::process::exit(2);
    } else if pct >= cfg.thresholds.warn_pct {
        println!("WARNING — {}", summary);
        std::process::exit(1);
    }
    println!("OK — {}", summary);
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!("");
    println!("[general]");
    println!("  mount_point = {}", cfg.general.mount_point);
    println!("  theme       = {}", cfg.general.theme);
    println!("");
    println!("[thresholds]");
    println!("  warn_pct = {}%", cfg.thresholds.warn_pct);
    println!("  crit_pct = {}%", cfg.thresholds.crit_pct);
    Ok(())
}

fn run(mount: PathBuf, initial_theme: ui::theme::ThemeVariant, cfg: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let mut app = App::new(mount, initial_theme, cfg);
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
