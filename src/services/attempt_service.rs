use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::quiz_attempt::{
    percentage, AttemptDetail, GlobalLeaderboardRow, QuizAttempt, QuizLeaderboardRow,
};

const LEADERBOARD_SIZE: i64 = 10;
const RECENT_ATTEMPTS: i64 = 10;

const DETAIL_SELECT: &str = r#"
    SELECT a.id, a.quiz_id, q.title AS quiz_title, q.difficulty, a.user_id, u.username,
           a.score, a.total, a.completed_at
    FROM quiz_attempts a
    JOIN quizzes q ON q.id = a.quiz_id
    JOIN users u ON u.id = a.user_id
"#;

/// Aggregates for a user's profile page.
#[derive(Debug, Clone)]
pub struct ProfileStats {
    pub quizzes_created: i64,
    pub attempts_taken: i64,
    pub average_percentage: f64,
    pub best_percentage: f64,
    pub recent_attempts: Vec<AttemptDetail>,
}

#[derive(Clone)]
pub struct AttemptService {
    pool: PgPool,
}

impl AttemptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record_attempt(
        &self,
        quiz_id: Uuid,
        user_id: Uuid,
        score: i32,
        total: i32,
    ) -> Result<QuizAttempt> {
        let attempt = sqlx::query_as::<_, QuizAttempt>(
            r#"
            INSERT INTO quiz_attempts (quiz_id, user_id, score, total)
            VALUES ($1, $2, $3, $4)
            RETURNING id, quiz_id, user_id, score, total, completed_at
            "#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .bind(score)
        .bind(total)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            attempt_id = %attempt.id,
            quiz_id = %quiz_id,
            user_id = %user_id,
            score,
            total,
            "quiz attempt recorded"
        );
        Ok(attempt)
    }

    /// Best attempt per user on one quiz, highest score first; ties go to
    /// whoever got there earlier.
    pub async fn quiz_leaderboard(&self, quiz_id: Uuid) -> Result<Vec<QuizLeaderboardRow>> {
        let rows = sqlx::query_as::<_, QuizLeaderboardRow>(
            r#"
            SELECT user_id, username, score, total, completed_at FROM (
                SELECT DISTINCT ON (a.user_id)
                       a.user_id, u.username, a.score, a.total, a.completed_at
                FROM quiz_attempts a
                JOIN users u ON u.id = a.user_id
                WHERE a.quiz_id = $1
                ORDER BY a.user_id, a.score DESC, a.completed_at ASC
            ) best
            ORDER BY score DESC, completed_at ASC
            LIMIT $2
            "#,
        )
        .bind(quiz_id)
        .bind(LEADERBOARD_SIZE)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Sum of each user's best score per quiz across all quizzes.
    pub async fn global_leaderboard(&self) -> Result<Vec<GlobalLeaderboardRow>> {
        let rows = sqlx::query_as::<_, GlobalLeaderboardRow>(
            r#"
            SELECT best.user_id, u.username,
                   SUM(best.score)::BIGINT AS total_score,
                   COUNT(*)::BIGINT AS quizzes_taken
            FROM (
                SELECT user_id, quiz_id, MAX(score) AS score
                FROM quiz_attempts
                GROUP BY user_id, quiz_id
            ) best
            JOIN users u ON u.id = best.user_id
            GROUP BY best.user_id, u.username
            ORDER BY total_score DESC, quizzes_taken DESC, u.username ASC
            LIMIT $1
            "#,
        )
        .bind(LEADERBOARD_SIZE)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn profile_stats(&self, user_id: Uuid) -> Result<ProfileStats> {
        let quizzes_created: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quizzes WHERE created_by = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let scores: Vec<(i32, i32)> =
            sqlx::query_as("SELECT score, total FROM quiz_attempts WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        let recent_attempts = sqlx::query_as::<_, AttemptDetail>(&format!(
            "{} WHERE a.user_id = $1 ORDER BY a.completed_at DESC LIMIT $2",
            DETAIL_SELECT
        ))
        .bind(user_id)
        .bind(RECENT_ATTEMPTS)
        .fetch_all(&self.pool)
        .await?;

        let (average_percentage, best_percentage) = summarize(&scores);
        Ok(ProfileStats {
            quizzes_created,
            attempts_taken: scores.len() as i64,
            average_percentage,
            best_percentage,
            recent_attempts,
        })
    }

    pub async fn get_attempt_detail(&self, attempt_id: Uuid) -> Result<AttemptDetail> {
        let detail = sqlx::query_as::<_, AttemptDetail>(&format!("{} WHERE a.id = $1", DETAIL_SELECT))
            .bind(attempt_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(detail)
    }
}

/// Average and best percentage over `(score, total)` pairs.
fn summarize(scores: &[(i32, i32)]) -> (f64, f64) {
    if scores.is_empty() {
        return (0.0, 0.0);
    }
    let percentages: Vec<f64> = scores.iter().map(|&(s, t)| percentage(s, t)).collect();
    let average = percentages.iter().sum::<f64>() / percentages.len() as f64;
    let best = percentages.iter().copied().fold(0.0, f64::max);
    ((average * 10.0).round() / 10.0, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_handles_no_attempts() {
        assert_eq!(summarize(&[]), (0.0, 0.0));
    }

    #[test]
    fn summarize_averages_percentages() {
        let (avg, best) = summarize(&[(1, 2), (3, 3), (0, 4)]);
        assert_eq!(avg, 50.0);
        assert_eq!(best, 100.0);
    }
}
