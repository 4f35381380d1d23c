use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Global connection; `initialize_database` must run first.
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database not initialized")
}

async fn execute(conn: &DatabaseConnection, sql: &str) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        sql.to_string(),
    ))
    .await?;
    Ok(())
}

/// Open (creating if needed) the SQLite database and bootstrap the schema.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/facility.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS f001_location (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            building TEXT NOT NULL DEFAULT '',
            floor TEXT,
            capacity INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS f002_asset (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            serial_number TEXT NOT NULL DEFAULT '',
            location_ref TEXT,
            status TEXT,
            maintenance TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS f003_work_order (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            priority TEXT,
            status TEXT,
            location_ref TEXT,
            assignee_ref TEXT,
            due_date TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS f003_work_order_history (
            id TEXT PRIMARY KEY NOT NULL,
            work_order_ref TEXT NOT NULL,
            status TEXT NOT NULL,
            changed_at TEXT NOT NULL,
            note TEXT
        );
    "#,
    )
    .await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS f004_booking (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            venue_ref TEXT,
            organizer TEXT NOT NULL DEFAULT '',
            contact_email TEXT,
            starts_at TEXT,
            ends_at TEXT,
            attendees INTEGER,
            status TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    )
    .await?;

    execute(
        &conn,
        r#"
        CREATE TABLE IF NOT EXISTS sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            full_name TEXT,
            email TEXT,
            contact_phone TEXT,
            department TEXT,
            work_group TEXT,
            staff_type TEXT,
            roles TEXT NOT NULL DEFAULT '[]',
            status TEXT,
            is_active INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;

    tracing::info!("Database ready at {}", db_file);
    Ok(())
}
