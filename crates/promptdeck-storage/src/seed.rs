//! Fixed starter dataset, applied once to an empty database.
//!
//! Every statement is `INSERT OR IGNORE`, so re-running against a partially
//! seeded database converges instead of failing.

use rusqlite::{params, Connection};
use tracing::info;
use uuid::Uuid;

use promptdeck_core::errors::{DeckError, DeckResult, StorageError};

const CODE_REVIEWER_CONTENT: &str = "You are an expert code reviewer with 20 years of experience across multiple languages and paradigms.

TASK: Review the provided code and deliver actionable feedback.

PROCESS:
1. First, identify the programming language and framework
2. Analyze code structure and architecture
3. Check for security vulnerabilities
4. Evaluate performance implications
5. Assess readability and maintainability

OUTPUT FORMAT:
- Summary (1-2 sentences)
- Critical Issues (must fix)
- Improvements (should fix)
- Suggestions (nice to have)
- Score: X/10

Be specific. Reference line numbers. Suggest exact fixes.";

const PROBLEM_SOLVER_CONTENT: &str = "You are a world-class problem solver who breaks down complex challenges into manageable steps.

APPROACH:
- Never jump to conclusions
- Show your reasoning at each step
- Consider multiple perspectives
- Validate assumptions before proceeding

FORMAT YOUR RESPONSE:
## Understanding the Problem
[Restate the problem in your own words]

## Key Constraints
[List all constraints and requirements]

## Step-by-Step Solution
1. [First step with reasoning]
2. [Second step with reasoning]
...

## Verification
[Check your solution against requirements]

## Final Answer
[Clear, actionable conclusion]";

fn seed_err(e: impl std::fmt::Display) -> DeckError {
    StorageError::SeedFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Seed the starter dataset when the users table is empty. Returns whether
/// the seed ran.
pub fn seed_if_empty(conn: &Connection) -> DeckResult<bool> {
    let user_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(seed_err)?;
    if user_count > 0 {
        return Ok(false);
    }

    info!("seeding initial data");
    let tx = conn.unchecked_transaction().map_err(seed_err)?;
    let result = seed_initial_data(&tx);
    match result {
        Ok(()) => {
            tx.commit().map_err(seed_err)?;
            info!(users = 4, prompts = 2, agents = 2, teams = 2, "initial data seeded");
            Ok(true)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn seed_initial_data(conn: &Connection) -> DeckResult<()> {
    let users: [(&str, &str, &str, &str, &str, i64); 4] = [
        (
            "u1",
            "promptmaster",
            "Sarah Chen",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah",
            "Building the future of AI interactions. CoT enthusiast.",
            94,
        ),
        (
            "u2",
            "agentsmith",
            "Marcus Wright",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=marcus",
            "Agent architect. RAG specialist.",
            89,
        ),
        (
            "u3",
            "reasoning_queen",
            "Aisha Patel",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=aisha",
            "PhD in reasoning systems.",
            97,
        ),
        (
            "u4",
            "codewhisperer",
            "Jake Morrison",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=jake",
            "Full-stack prompt engineer.",
            85,
        ),
    ];
    for (id, handle, name, avatar, bio, credibility) in users {
        conn.execute(
            "INSERT OR IGNORE INTO users (id, handle, name, avatar, bio, credibility_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, handle, name, avatar, bio, credibility],
        )
        .map_err(seed_err)?;
    }

    let mut prompt_stmt = conn
        .prepare(
            "INSERT OR IGNORE INTO prompts (id, title, content, author_id, tags, \
             techniques_used, model_targets, rating_score, rating_works_as_claimed, \
             rating_reusable, rating_structured, rating_agent_ready, fork_count, is_pinned)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        )
        .map_err(seed_err)?;
    prompt_stmt
        .execute(params![
            "p1",
            "Universal Code Reviewer Agent",
            CODE_REVIEWER_CONTENT,
            "u1",
            r#"["coding","review","security"]"#,
            r#"["Role","CoT","Structured Output"]"#,
            r#"["GPT-4","Claude"]"#,
            4.8,
            342,
            289,
            312,
            256,
            127,
            true,
        ])
        .map_err(seed_err)?;
    prompt_stmt
        .execute(params![
            "p2",
            "Step-by-Step Problem Solver",
            PROBLEM_SOLVER_CONTENT,
            "u3",
            r#"["reasoning","problem-solving","education"]"#,
            r#"["CoT","Self-Verification","Structured Output"]"#,
            r#"["GPT-4","Claude","Gemini"]"#,
            4.9,
            567,
            489,
            534,
            123,
            234,
            true,
        ])
        .map_err(seed_err)?;
    drop(prompt_stmt);

    let agents: [(&str, &str, &str, &str, &str, &str, f64, i64); 2] = [
        (
            "a1",
            "CodeGuard",
            "Autonomous code review agent that catches bugs before they hit production.",
            "u1",
            "https://api.dicebear.com/7.x/bottts/svg?seed=codeguard",
            r#"["coding","security"]"#,
            4.8,
            12450,
        ),
        (
            "a2",
            "ReasonBot",
            "Multi-step reasoning agent for complex problem solving.",
            "u3",
            "https://api.dicebear.com/7.x/bottts/svg?seed=reasonbot",
            r#"["reasoning","analysis"]"#,
            4.9,
            8900,
        ),
    ];
    for (id, name, description, creator_id, avatar, tags, rating, usage) in agents {
        conn.execute(
            "INSERT OR IGNORE INTO agents (id, name, description, creator_id, avatar, \
             tags, performance_rating, usage_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![id, name, description, creator_id, avatar, tags, rating, usage],
        )
        .map_err(seed_err)?;
    }

    let teams: [(&str, &str, &str, &str); 2] = [
        (
            "t1",
            "Prompt Engineers Guild",
            "A community of prompt engineering enthusiasts sharing best practices.",
            "u1",
        ),
        (
            "t2",
            "AI Agents Builders",
            "Building autonomous AI agents for real-world applications.",
            "u2",
        ),
    ];
    for (id, name, description, creator_id) in teams {
        let avatar = format!("https://api.dicebear.com/7.x/shapes/svg?seed={name}");
        conn.execute(
            "INSERT OR IGNORE INTO teams (id, name, description, creator_id, avatar)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, description, creator_id, avatar],
        )
        .map_err(seed_err)?;
        conn.execute(
            "INSERT OR IGNORE INTO team_members (id, team_id, user_id, role)
             VALUES (?1, ?2, ?3, 'owner')",
            params![Uuid::new_v4().to_string(), id, creator_id],
        )
        .map_err(seed_err)?;
    }

    Ok(())
}
