//! CampusHub school portal
//!
//! Main application entry point

use tracing::{info, warn, error};

use CampusHub::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, open_store},
    services::ServiceFactory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} for {}...", CampusHub::info(), settings.school.name);

    info!(backend = ?settings.storage.backend, data_dir = %settings.storage.data_dir, "Opening data source...");
    let pool = open_store(&settings.storage)?;
    let database_service = DatabaseService::new(pool);

    info!("Initializing services...");
    let services = ServiceFactory::new(database_service.clone(), settings.clone());

    let health = services.health_check().await;
    if health.is_healthy() {
        info!(backend = %health.storage_backend, "Data source healthy");
        for issue in health.get_issues() {
            warn!(issue = %issue, "Health check warning");
        }
    } else {
        for issue in health.get_issues() {
            error!(issue = %issue, "Health check failed");
        }
    }

    let stats = database_service.get_system_stats().await?;
    info!(
        admins = stats.admins,
        teachers = stats.teachers,
        students = stats.students,
        suspended = stats.suspended_users,
        courses = stats.courses,
        sessions = stats.sessions,
        schedules = stats.schedules,
        events = stats.events,
        attendance_records = stats.attendance_records,
        forum_posts = stats.forum_posts,
        "Dataset loaded"
    );

    for course in database_service.catalog.list_courses().await? {
        let at_risk = match services.attendance_service.at_risk_students(course.id).await {
            Ok(at_risk) => at_risk,
            Err(e) if e.is_recoverable() => {
                warn!(course = %course.course_code, severity = %e.severity(), error = %e.user_message(), "Skipping attendance report");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !at_risk.is_empty() {
            warn!(course = %course.course_code, students = at_risk.len(), "Course has students below the attendance threshold");
        }
    }

    if settings.storage.persist_on_write {
        database_service.flush().await?;
    }

    info!("{} is ready", CampusHub::NAME);
    Ok(())
}
