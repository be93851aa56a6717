//! Integration test: gateway lifecycle against an in-memory database.

use promptdeck_core::types::PromptDraft;
use promptdeck_storage::StorageGateway;

async fn seeded_gateway() -> StorageGateway {
    let gateway = StorageGateway::open_in_memory().unwrap();
    gateway.ensure_schema().await.unwrap();
    gateway.seed_if_empty().await.unwrap();
    gateway
}

fn make_draft(title: &str) -> PromptDraft {
    PromptDraft {
        title: title.to_string(),
        content: "Answer step by step.".to_string(),
        tags: vec!["testing".to_string()],
        techniques_used: vec!["CoT".to_string()],
        model_targets: vec!["GPT-4".to_string()],
        forked_from: None,
    }
}

// --- schema + seed ---

#[tokio::test]
async fn test_schema_init_is_idempotent() {
    let gateway = StorageGateway::open_in_memory().unwrap();
    gateway.ensure_schema().await.unwrap();
    gateway.ensure_schema().await.unwrap();

    let users = gateway.fetch_users().await.unwrap();
    assert!(users.is_empty(), "fresh database should have no users");
}

#[tokio::test]
async fn test_seed_runs_once_and_only_on_empty() {
    let gateway = StorageGateway::open_in_memory().unwrap();
    gateway.ensure_schema().await.unwrap();

    assert!(gateway.seed_if_empty().await.unwrap(), "first seed should run");
    assert!(
        !gateway.seed_if_empty().await.unwrap(),
        "second seed should be skipped"
    );

    assert_eq!(gateway.fetch_users().await.unwrap().len(), 4);
    assert_eq!(gateway.fetch_prompts().await.unwrap().len(), 2);
    assert_eq!(gateway.fetch_agents().await.unwrap().len(), 2);
    assert_eq!(gateway.fetch_teams().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_seeded_collections_have_expected_shape() {
    let gateway = seeded_gateway().await;

    let prompts = gateway.fetch_prompts().await.unwrap();
    let p1 = prompts.iter().find(|p| p.id == "p1").expect("p1 seeded");
    assert_eq!(p1.title, "Universal Code Reviewer Agent");
    assert_eq!(p1.author.handle, "promptmaster");
    assert_eq!(p1.tags, vec!["coding", "review", "security"]);
    assert_eq!(p1.rating_signals.works_as_claimed, 342);
    assert_eq!(p1.fork_count, 127);
    assert!(p1.is_pinned);
    assert!(p1.content.contains("Score: X/10"));

    // agents come back best-rated first
    let agents = gateway.fetch_agents().await.unwrap();
    assert_eq!(agents[0].name, "ReasonBot");
    assert_eq!(agents[1].name, "CodeGuard");
    assert_eq!(agents[0].creator.handle, "reasoning_queen");

    // each seeded team has exactly its owner
    let teams = gateway.fetch_teams().await.unwrap();
    for team in &teams {
        assert_eq!(team.member_count, 1, "team {} should have one owner", team.name);
        assert_eq!(team.members.len(), 1);
    }
    let guild = teams
        .iter()
        .find(|t| t.name == "Prompt Engineers Guild")
        .expect("t1 seeded");
    assert!(guild.avatar.contains("seed=Prompt Engineers Guild"));
    // one prompt authored by the guild owner
    assert_eq!(guild.prompt_count, 1);
}

#[tokio::test]
async fn test_pinned_fetch_is_rating_sorted() {
    let gateway = seeded_gateway().await;

    let pinned = gateway.fetch_pinned().await.unwrap();
    assert_eq!(pinned.len(), 2);
    assert_eq!(pinned[0].id, "p2", "4.9 should outrank 4.8");
    assert_eq!(pinned[1].id, "p1");
}

// --- prompt creation ---

#[tokio::test]
async fn test_create_prompt_bumps_author_counter() {
    let gateway = seeded_gateway().await;

    let id = gateway
        .create_prompt(&make_draft("Test Prompt"), "u1")
        .await
        .unwrap();

    let prompts = gateway.fetch_prompts().await.unwrap();
    let created = prompts.iter().find(|p| p.id == id).expect("created prompt visible");
    assert_eq!(created.title, "Test Prompt");
    assert_eq!(created.author.id, "u1");
    assert_eq!(created.author.created_prompts, 1);
    assert_eq!(created.rating_score, 0.0);
    assert!(!created.is_pinned);

    let users = gateway.fetch_users().await.unwrap();
    let author = users.iter().find(|u| u.id == "u1").unwrap();
    assert_eq!(author.created_prompts, 1);
}

#[tokio::test]
async fn test_create_prompt_records_fork_parent() {
    let gateway = seeded_gateway().await;

    let mut draft = make_draft("Reviewer fork");
    draft.forked_from = Some("p1".to_string());
    let id = gateway.create_prompt(&draft, "u2").await.unwrap();

    let prompts = gateway.fetch_prompts().await.unwrap();
    let fork = prompts.iter().find(|p| p.id == id).unwrap();
    assert_eq!(fork.forked_from.as_deref(), Some("p1"));
}

#[tokio::test]
async fn test_create_prompt_with_unknown_author_rolls_back() {
    let gateway = seeded_gateway().await;

    let result = gateway.create_prompt(&make_draft("Orphan"), "ghost").await;
    assert!(result.is_err(), "foreign key should reject unknown author");

    // nothing half-written
    assert_eq!(gateway.fetch_prompts().await.unwrap().len(), 2);
}

// --- pin / unpin ---

#[tokio::test]
async fn test_pin_unpin_round_trip() {
    let gateway = seeded_gateway().await;
    let id = gateway
        .create_prompt(&make_draft("Pinnable"), "u4")
        .await
        .unwrap();

    gateway.pin_prompt(&id, "u1").await.unwrap();
    gateway.pin_prompt(&id, "u2").await.unwrap();
    assert_eq!(gateway.pins_for_prompt(&id).await.unwrap().len(), 2);

    let pinned = gateway.fetch_pinned().await.unwrap();
    assert!(pinned.iter().any(|p| p.id == id), "pinned fetch should include it");

    // one of two pins removed: still pinned
    gateway.unpin_prompt(&id, "u1").await.unwrap();
    let prompts = gateway.fetch_prompts().await.unwrap();
    assert!(prompts.iter().find(|p| p.id == id).unwrap().is_pinned);

    // last pin removed: flag clears
    gateway.unpin_prompt(&id, "u2").await.unwrap();
    let prompts = gateway.fetch_prompts().await.unwrap();
    assert!(!prompts.iter().find(|p| p.id == id).unwrap().is_pinned);
    let pinned = gateway.fetch_pinned().await.unwrap();
    assert!(pinned.iter().all(|p| p.id != id));
}

#[tokio::test]
async fn test_duplicate_pin_is_silent_noop() {
    let gateway = seeded_gateway().await;

    gateway.pin_prompt("p1", "u2").await.unwrap();
    gateway.pin_prompt("p1", "u2").await.unwrap();

    assert_eq!(gateway.pins_for_prompt("p1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unpin_without_pin_rows_clears_seeded_flag() {
    let gateway = seeded_gateway().await;

    // seeded prompts carry the flag without any pin rows; an unpin from
    // anyone recomputes it to false
    gateway.unpin_prompt("p1", "u4").await.unwrap();

    let prompts = gateway.fetch_prompts().await.unwrap();
    assert!(!prompts.iter().find(|p| p.id == "p1").unwrap().is_pinned);
    let pinned = gateway.fetch_pinned().await.unwrap();
    assert!(pinned.iter().all(|p| p.id != "p1"));
}

// --- teams ---

#[tokio::test]
async fn test_join_team_updates_aggregates() {
    let gateway = seeded_gateway().await;

    gateway.join_team("t1", "u3").await.unwrap();

    let teams = gateway.fetch_teams().await.unwrap();
    assert_eq!(teams[0].id, "t1", "largest team first");
    assert_eq!(teams[0].member_count, 2);
    // owner u1 authored p1, new member u3 authored p2
    assert_eq!(teams[0].prompt_count, 2);
}

#[tokio::test]
async fn test_join_team_twice_is_silent_noop() {
    let gateway = seeded_gateway().await;

    gateway.join_team("t2", "u4").await.unwrap();
    gateway.join_team("t2", "u4").await.unwrap();

    let teams = gateway.fetch_teams().await.unwrap();
    let t2 = teams.iter().find(|t| t.id == "t2").unwrap();
    assert_eq!(t2.member_count, 2);
}

#[tokio::test]
async fn test_join_unknown_team_errors() {
    let gateway = seeded_gateway().await;

    let result = gateway.join_team("no-such-team", "u1").await;
    assert!(result.is_err(), "foreign key should reject unknown team");
}

#[tokio::test]
async fn test_create_team_installs_owner_membership() {
    let gateway = seeded_gateway().await;

    let id = gateway
        .create_team("Eval Wranglers", "Prompt evaluation tooling.", "u4")
        .await
        .unwrap();

    let teams = gateway.fetch_teams().await.unwrap();
    let team = teams.iter().find(|t| t.id == id).expect("created team visible");
    assert_eq!(team.name, "Eval Wranglers");
    assert_eq!(team.member_count, 1);
    assert_eq!(team.members[0].id, "u4");
    assert!(team.avatar.contains("seed=Eval Wranglers"));
}

#[tokio::test]
async fn test_create_team_with_unknown_creator_rolls_back() {
    let gateway = seeded_gateway().await;

    let result = gateway.create_team("Ghost Team", "", "ghost").await;
    assert!(result.is_err());
    let teams = gateway.fetch_teams().await.unwrap();
    assert!(teams.iter().all(|t| t.name != "Ghost Team"), "no partial team row");
}
