use std::time::Duration;

use askmom_core::{AsyncStyle, DecisionFlag, DisplayLine, RunState};
use orchestrator::{EngineConfig, RunReport, TriggerBoard};

const IPHONE_SHOW_OFF: &str = "Hey friend, I have a new gold iPhone XR phone";

fn board(happy: bool) -> TriggerBoard {
    TriggerBoard::new(EngineConfig::default().with_mood(DecisionFlag::from(happy)))
}

fn lines(report: &RunReport) -> Vec<&str> {
    report.lines.iter().map(DisplayLine::as_str).collect()
}

fn is_refusal(line: &str) -> bool {
    line == "Mom is not happy." || line == "mom is not happy"
}

mod happy_mom {
    use super::*;

    #[tokio::test]
    async fn test_run1_announces_gift() {
        let report = board(true).fire(AsyncStyle::Callback).await.unwrap();
        assert_eq!(lines(&report), vec!["Mom gives you a gold iPhone XR phone"]);
    }

    #[tokio::test]
    async fn test_run2_writes_surrounding_lines_first() {
        let report = board(true).fire(AsyncStyle::Chained).await.unwrap();
        assert_eq!(
            lines(&report),
            vec!["before asking Mom", "after asking mom", IPHONE_SHOW_OFF]
        );
    }

    #[tokio::test]
    async fn test_run3_shows_off_without_surrounding_lines() {
        let report = board(true).fire(AsyncStyle::Arrow).await.unwrap();
        assert_eq!(lines(&report), vec![IPHONE_SHOW_OFF]);
    }

    #[tokio::test]
    async fn test_run4_keeps_program_order() {
        let report = board(true).fire(AsyncStyle::Sequential).await.unwrap();
        assert_eq!(
            lines(&report),
            vec!["before asking Mom", IPHONE_SHOW_OFF, "after asking mom"]
        );
    }

    #[tokio::test]
    async fn test_no_success_run_emits_a_refusal() {
        let reports = board(true).fire_all().await.unwrap();
        assert_eq!(reports.len(), 4);
        for report in &reports {
            assert_eq!(report.state, RunState::Succeeded);
            assert_eq!(
                report.transitions,
                vec![RunState::Pending, RunState::PhoneObtained, RunState::Succeeded]
            );
            assert!(!lines(report).into_iter().any(is_refusal));
        }
    }
}

mod unhappy_mom {
    use super::*;

    #[tokio::test]
    async fn test_run1_is_exactly_the_refusal() {
        let report = board(false).fire(AsyncStyle::Callback).await.unwrap();
        assert_eq!(lines(&report), vec!["Mom is not happy."]);
    }

    #[tokio::test]
    async fn test_run2_refusal_after_surrounding_lines() {
        let report = board(false).fire(AsyncStyle::Chained).await.unwrap();
        assert_eq!(
            lines(&report),
            vec!["before asking Mom", "after asking mom", "Mom is not happy."]
        );
    }

    #[tokio::test]
    async fn test_run3_shares_run1_refusal() {
        let report = board(false).fire(AsyncStyle::Arrow).await.unwrap();
        assert_eq!(lines(&report), vec!["Mom is not happy."]);
    }

    #[tokio::test]
    async fn test_run4_aborts_after_first_line() {
        let report = board(false).fire(AsyncStyle::Sequential).await.unwrap();
        assert_eq!(lines(&report), vec!["before asking Mom", "mom is not happy"]);
    }

    #[tokio::test]
    async fn test_every_run_has_one_refusal_and_no_show_off() {
        for report in board(false).fire_all().await.unwrap() {
            let output = lines(&report);
            assert_eq!(report.state, RunState::Failed);
            assert_eq!(report.transitions, vec![RunState::Pending, RunState::Failed]);
            assert_eq!(output.iter().filter(|line| is_refusal(line)).count(), 1);
            assert!(!output.iter().any(|line| line.starts_with("Hey friend")));
        }
    }
}

mod settlement {
    use super::*;

    #[tokio::test]
    async fn test_repeated_triggers_are_idempotent() {
        for happy in [true, false] {
            let board = board(happy);
            for style in AsyncStyle::ALL {
                let first = board.fire(style).await.unwrap();
                let second = board.fire(style).await.unwrap();
                assert_eq!(first.lines, second.lines);
                assert_eq!(first.state, second.state);
                assert_ne!(first.run_id, second.run_id);
            }
        }
    }

    #[tokio::test]
    async fn test_mood_change_needs_rebuild() {
        let mut board = board(true);
        let before = board.fire(AsyncStyle::Callback).await.unwrap();
        assert!(before.succeeded());

        // the config change alone constructs nothing new
        let config = board.config().clone().with_mood(DecisionFlag::unhappy());
        assert_ne!(&config, board.config());
        assert!(board.fire(AsyncStyle::Callback).await.unwrap().succeeded());

        board.rebuild(config.mood);
        let after = board.fire(AsyncStyle::Callback).await.unwrap();
        assert_eq!(after.state, RunState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chained_order_is_independent_of_latency() {
        for latency_ms in [0, 1, 250, 5_000] {
            let board = TriggerBoard::new(
                EngineConfig::default().with_latency(Duration::from_millis(latency_ms)),
            );
            let report = board.fire(AsyncStyle::Chained).await.unwrap();
            assert_eq!(
                lines(&report),
                vec!["before asking Mom", "after asking mom", IPHONE_SHOW_OFF]
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_only_delays_the_first_observer() {
        let latency = Duration::from_millis(800);
        let board = TriggerBoard::new(EngineConfig::default().with_latency(latency));

        let start = tokio::time::Instant::now();
        board.fire(AsyncStyle::Callback).await.unwrap();
        assert!(start.elapsed() >= latency);

        // run2 and run3 share run1's request, which has already settled
        let second = tokio::time::Instant::now();
        board.fire(AsyncStyle::Chained).await.unwrap();
        board.fire(AsyncStyle::Arrow).await.unwrap();
        assert_eq!(second.elapsed(), Duration::ZERO);

        // run4 has its own request and waits again
        let third = tokio::time::Instant::now();
        board.fire(AsyncStyle::Sequential).await.unwrap();
        assert!(third.elapsed() >= latency);
    }
}
