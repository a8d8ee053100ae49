//! One-shot bootstrap seeding for the `projects` table.

use sqlx::PgPool;

use crate::models::project::CreateProject;

/// Result of a [`seed_projects`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the bootstrap set was inserted.
    Seeded { inserted: usize },
    /// The table already had rows; nothing was inserted.
    AlreadySeeded,
}

impl SeedOutcome {
    /// Human-readable status string returned by the seed endpoint.
    pub fn status(&self) -> &'static str {
        match self {
            SeedOutcome::Seeded { .. } => "Projects seeded successfully",
            SeedOutcome::AlreadySeeded => "Projects already seeded",
        }
    }
}

/// The fixed bootstrap project set.
fn bootstrap_projects() -> Vec<CreateProject> {
    vec![
        CreateProject {
            title: "AI Chat Assistant".to_string(),
            description: "A conversational AI built with machine learning that can answer \
                          questions and provide helpful responses."
                .to_string(),
            technology: "Python, TensorFlow, Natural Language Processing".to_string(),
            category: "Artificial Intelligence".to_string(),
            featured: Some(true),
            github_url: Some("https://github.com/mohammedziaul/ai-chat-assistant".to_string()),
            live_url: None,
            image_url: Some("🤖".to_string()),
        },
        CreateProject {
            title: "Weather Prediction Model".to_string(),
            description: "Machine learning model that predicts weather patterns using \
                          historical data and neural networks."
                .to_string(),
            technology: "Python, Scikit-learn, Pandas, NumPy".to_string(),
            category: "Machine Learning".to_string(),
            featured: Some(true),
            github_url: Some("https://github.com/mohammedziaul/weather-prediction".to_string()),
            live_url: None,
            image_url: Some("🌤️".to_string()),
        },
    ]
}

/// Insert the bootstrap project set if, and only if, the table is empty.
///
/// Idempotent at collection-emptiness granularity: a second call is a no-op.
/// The emptiness check and the inserts run in one transaction so a partial
/// seed is never left behind.
pub async fn seed_projects(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(&mut *tx)
        .await?;
    if existing.unwrap_or(0) > 0 {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let projects = bootstrap_projects();
    let inserted = projects.len();
    for project in &projects {
        sqlx::query(
            "INSERT INTO projects (title, description, technology, category, featured, github_url, live_url, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.technology)
        .bind(&project.category)
        .bind(project.featured)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(&project.image_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(inserted, "Seeded bootstrap projects");
    Ok(SeedOutcome::Seeded { inserted })
}
