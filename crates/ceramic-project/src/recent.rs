//! Recently opened projects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use ceramic_storage::Database;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentProject {
    pub path: String,
    pub name: String,
    pub opened_at: DateTime<Utc>,
}

pub struct RecentProjects {
    db: Database,
    /// Entries kept after each open
    limit: usize,
}

impl RecentProjects {
    pub fn new(db: Database, limit: usize) -> Self {
        Self { db, limit }
    }

    /// Move a project to the top of the list, dropping the oldest entries
    /// beyond the limit.
    pub fn record_open(&self, path: &str, name: &str) -> Result<RecentProject> {
        let project = RecentProject {
            path: path.to_string(),
            name: name.to_string(),
            opened_at: Utc::now(),
        };

        self.db.transaction(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO recent_projects (path, name, opened_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![project.path, project.name, project.opened_at.to_rfc3339()],
            )?;
            conn.execute(
                "DELETE FROM recent_projects WHERE path NOT IN (
                     SELECT path FROM recent_projects
                     ORDER BY opened_at DESC, rowid DESC
                     LIMIT ?1
                 )",
                [self.limit as i64],
            )?;
            Ok(())
        })?;

        tracing::info!(path = %project.path, name = %project.name, "Recorded recent project");

        Ok(project)
    }

    /// Most recently opened first
    pub fn list(&self) -> Result<Vec<RecentProject>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT path, name, opened_at FROM recent_projects
                 ORDER BY opened_at DESC, rowid DESC
                 LIMIT ?1",
            )?;

            let projects = stmt
                .query_map([self.limit as i64], |row| {
                    let opened_str: String = row.get(2)?;
                    let opened_at = DateTime::parse_from_rfc3339(&opened_str)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now());

                    Ok(RecentProject {
                        path: row.get(0)?,
                        name: row.get(1)?,
                        opened_at,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();

            Ok(projects)
        })?)
    }

    /// Forget a project. Returns whether it was listed.
    pub fn remove(&self, path: &str) -> Result<bool> {
        let removed = self.db.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM recent_projects WHERE path = ?1", [path])?)
        })?;
        Ok(removed > 0)
    }
}

impl Clone for RecentProjects {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            limit: self.limit,
        }
    }
}
