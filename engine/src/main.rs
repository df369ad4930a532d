// Console front end: prints the recent market snapshot, then reads
// "open high low" lines from stdin until EOF and prints each prediction.
use engine::config::settings::{Settings, DEFAULT_CONFIG_PATH};
use engine::{AppStatus, Application};
use shared::models::PreviewTable;
use shared::utils::format_decimal;
use std::io::{self, BufRead, Write};
use tracing::info;

fn render_preview(table: &PreviewTable) -> String {
    let mut out = String::new();
    out.push_str(
        &table
            .columns
            .iter()
            .map(|c| format!("{:>10}", c))
            .collect::<Vec<_>>()
            .join(" "),
    );
    out.push('\n');
    for row in &table.rows {
        let line = row
            .iter()
            .map(|v| format!("{:>10}", format_decimal(*v, 2)))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Oil Price Predictor console...");

    let status = Settings::load_or_default(DEFAULT_CONFIG_PATH)
        .map(|settings| Application::bootstrap(&settings))
        .unwrap_or_else(AppStatus::Failed);
    let app = match status {
        AppStatus::Ready(app) => app,
        AppStatus::Failed(e) => {
            eprintln!("{}: {}", e.class().label(), e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    let dataset = app.dataset();
    writeln!(
        stdout,
        "Recent Market Snapshot ({} rows from {}; columns: {})",
        dataset.len(),
        dataset.path().display(),
        dataset.columns().join(", ")
    )?;
    write!(stdout, "{}", render_preview(&app.preview()))?;
    writeln!(stdout)?;
    writeln!(stdout, "Enter today's Open High Low prices (Ctrl-D to quit):")?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let fields: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ';')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            writeln!(stdout, "Invalid input: expected three prices (Open High Low), got {}", fields.len())?;
            continue;
        }

        let outcome = app.submit_raw(fields[0], fields[1], fields[2]);
        writeln!(stdout, "{}", outcome.headline())?;
        stdout.flush()?;
    }

    info!("Oil Price Predictor console finished.");
    Ok(())
}
