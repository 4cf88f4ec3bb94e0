use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all migrations applied
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rCheckin…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &db_path);

    //
    // 2️⃣ APERTURA DB (tabelle + migrazioni)
    //
    let pool = DbPool::new(&db_path)?;

    println!(
        "✅ Database initialized at {} (schema v{})",
        &db_path,
        schema_version(&pool.conn)?
    );
    println!("🎉 rCheckin initialization completed!");
    Ok(())
}
